use anyhow::{Context, Result};
use jsonwebtoken::Algorithm;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_expiration_days: i64,
    pub anthropic_api_key: String,
    pub cors_origins: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            mongo_url: require_env("MONGO_URL")?,
            db_name: require_env("DB_NAME")?,
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_algorithm: std::env::var("JWT_ALGORITHM")
                .unwrap_or_else(|_| "HS256".to_string())
                .parse::<Algorithm>()
                .context("JWT_ALGORITHM must be a valid signing algorithm")?,
            jwt_expiration_days: std::env::var("JWT_EXPIRATION_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<i64>()
                .context("JWT_EXPIRATION_DAYS must be an integer")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Minimal configuration for unit tests; never reads the environment.
    pub fn for_tests() -> Self {
        Config {
            mongo_url: "mongodb://localhost:27017".to_string(),
            db_name: "careerlaunch_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_algorithm: Algorithm::HS256,
            jwt_expiration_days: 30,
            anthropic_api_key: "test-key".to_string(),
            cors_origins: "*".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
