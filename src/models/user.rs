use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use validator::Validate;

#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type, Display)]
#[sqlx(type_name = "ENUM")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sqlx(rename = "user")]
    #[strum(serialize = "user")]
    User,
    #[sqlx(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct UserRegistrationRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    // bcrypt only hashes the first 72 bytes
    #[validate(length(min = 8, max = 72))]
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct UserLoginResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize, JsonSchema)]
#[schemars(example = "RegisterResponse::example")]
pub struct RegisterResponse {
    pub message: String,

    #[schemars(title = "User ID")]
    pub user_id: String,
}

impl RegisterResponse {
    pub fn example() -> Self {
        Self {
            message: "User registered successfully".to_string(),
            user_id: "7f1c6f2a-3f36-4f7d-9f5b-1f2ad0a5f3c1".to_string(),
        }
    }
}
