//! Credential store: bcrypt password hashes, signed bearer tokens, and the
//! extractor that authenticates requests.

pub mod handlers;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// Hashes a password with bcrypt at the library default cost.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// Verifies a password against a stored bcrypt hash.
/// A malformed stored hash verifies as false rather than erroring.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Token payload: the account id and an absolute expiration.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub exp: usize,
}

/// Issues a signed bearer token for the given account id.
/// Expiration is `now + JWT_EXPIRATION_DAYS` (default 30 days).
pub fn issue_token(user_id: &str, config: &Config) -> Result<String, AppError> {
    let expiration = Utc::now() + Duration::days(config.jwt_expiration_days);
    let claims = Claims {
        user_id: user_id.to_string(),
        exp: expiration.timestamp() as usize,
    };
    encode(
        &Header::new(config.jwt_algorithm),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))
}

/// Validates a bearer token and returns the account id it was issued for.
/// A payload without a `user_id` claim is rejected the same as a bad
/// signature.
pub fn validate_token(token: &str, config: &Config) -> Result<String, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::new(config.jwt_algorithm),
    )
    .map_err(|err| match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })?;
    Ok(data.claims.user_id)
}

/// The authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Expected Bearer token".to_string()))?;

        let user_id = validate_token(token, &state.config)?;
        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::Algorithm;

    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("Pw1!").unwrap();
        assert!(verify_password("Pw1!", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!verify_password("Pw1!", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_token_roundtrip() {
        let config = Config::for_tests();
        let token = issue_token("user-123", &config).unwrap();
        let user_id = validate_token(&token, &config).unwrap();
        assert_eq!(user_id, "user-123");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = Config::for_tests();
        let claims = Claims {
            user_id: "user-123".to_string(),
            exp: (Utc::now() - Duration::days(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        match validate_token(&token, &config) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("expected Unauthorized(Token expired), got {other:?}"),
        }
    }

    #[test]
    fn test_token_without_user_id_rejected() {
        #[derive(Serialize)]
        struct BareClaims {
            exp: usize,
        }

        let config = Config::for_tests();
        let claims = BareClaims {
            exp: (Utc::now() + Duration::days(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        match validate_token(&token, &config) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid token"),
            other => panic!("expected Unauthorized(Invalid token), got {other:?}"),
        }
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = Config::for_tests();
        let token = issue_token("user-123", &config).unwrap();

        let mut other_secret = Config::for_tests();
        other_secret.jwt_secret = "a-different-secret".to_string();

        assert!(validate_token(&token, &other_secret).is_err());
    }
}
