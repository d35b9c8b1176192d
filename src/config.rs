use crate::utils::error::{AppError, AppResult};
use std::env;

// Explicit configuration object handed to Rocket as managed state; nothing else
// reads the process environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(AppConfig {
            database_url: require_var("DATABASE_URL")?,
            jwt_secret: require_var("JWT_SECRET")?,
            admin_api_key: require_var("ADMIN_API_KEY")?,
        })
    }
}

fn require_var(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Internal(format!("{} must be set", name)))
}
