//! Axum route handlers for the Auth API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{self, AuthUser};
use crate::db;
use crate::errors::AppError;
use crate::models::user::{UserDoc, UserProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/signup
///
/// Creates an account and returns a bearer token plus the public profile.
/// A duplicate email is rejected by the unique index on `users.email`.
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if !request.email.contains('@') {
        return Err(AppError::Validation(
            "email must be a valid address".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "full_name cannot be empty".to_string(),
        ));
    }

    let user = UserDoc::new(
        request.email,
        request.full_name,
        auth::hash_password(&request.password)?,
    );

    if let Err(err) = state.store.insert_user(&user).await {
        if db::is_duplicate_key_error(&err) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        return Err(err.into());
    }

    let token = auth::issue_token(&user.id, &state.config)?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/auth/login
///
/// A missing account and a bad password return the same error so the
/// response does not reveal which emails are registered.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    if !auth::verify_password(&request.password, &user.hashed_password) {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = auth::issue_token(&user.id, &state.config)?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
///
/// Returns the caller's public profile. 404 if the account vanished after
/// the token was issued.
pub async fn handle_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = state
        .store
        .find_user(&auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
