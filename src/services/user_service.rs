use crate::models::user::{
    Role, User, UserLoginRequest, UserLoginResponse, UserRegistrationRequest,
};
use crate::utils::error::{AppError, AppResult};
use crate::utils::jwt;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::MySqlPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: MySqlPool,
    jwt_secret: String,
}

impl UserService {
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        UserService { pool, jwt_secret }
    }

    // Register a new user
    pub async fn register_user(&self, request: UserRegistrationRequest) -> AppResult<String> {
        // Username and email are both unique; one lookup covers both.
        let existing_user =
            sqlx::query_scalar::<_, String>("SELECT id FROM user WHERE username = ? OR email = ?")
                .bind(&request.username)
                .bind(&request.email)
                .fetch_optional(&self.pool)
                .await?;

        if existing_user.is_some() {
            return Err(AppError::Conflict("Username or email already exists".into()));
        }

        let hashed_password = hash(request.password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let user_id = Uuid::new_v4().to_string();
        let role = request.role.unwrap_or(Role::User);

        sqlx::query("INSERT INTO user (id, username, email, password, role) VALUES (?, ?, ?, ?, ?)")
            .bind(&user_id)
            .bind(&request.username)
            .bind(&request.email)
            .bind(&hashed_password)
            .bind(&role)
            .execute(&self.pool)
            .await?;

        Ok(user_id)
    }

    // Login user
    pub async fn login_user(&self, request: UserLoginRequest) -> AppResult<UserLoginResponse> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, role FROM user WHERE username = ?",
        )
        .bind(&request.username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::AuthError("Invalid credentials".into()))?;

        // Verify password
        let password_matches = verify(request.password.as_bytes(), &user.password)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        if !password_matches {
            return Err(AppError::AuthError("Invalid credentials".into()));
        }

        // Generate JWT token
        let token = jwt::generate_token(&user.id, &user.username, &user.role, &self.jwt_secret)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        Ok(UserLoginResponse {
            token,
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}
