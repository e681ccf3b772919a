use crate::models::user::{
    Role, User, UserLoginRequest, UserLoginResponse, UserRegistrationRequest,
};
use crate::utils::error::{AppError, AppResult};
use crate::utils::jwt;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        UserService { pool }
    }

    // Register a new user. Self-registration always lands on the USER role;
    // admin accounts are provisioned out of band.
    pub async fn register_user(&self, request: UserRegistrationRequest) -> AppResult<i64> {
        // Check if username already exists
        let existing_user: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM user WHERE username = ?")
                .bind(&request.username)
                .fetch_optional(&self.pool)
                .await?;

        if existing_user.is_some() {
            return Err(AppError::Conflict("Username already exists".into()));
        }

        // Hash password
        let hashed_password = hash(request.password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // Insert user
        let result = sqlx::query("INSERT INTO user (username, password, role) VALUES (?, ?, ?)")
            .bind(&request.username)
            .bind(&hashed_password)
            .bind(Role::User)
            .execute(&self.pool)
            .await?;

        let user_id = result.last_insert_rowid();
        info!(user_id, username = %request.username, "registered user");

        Ok(user_id)
    }

    // Login user
    pub async fn login_user(&self, request: UserLoginRequest) -> AppResult<UserLoginResponse> {
        let user: User =
            sqlx::query_as("SELECT id, username, password, role FROM user WHERE username = ?")
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
        let token = jwt::generate_token(user.id, &user.role)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        Ok(UserLoginResponse {
            token,
            user_id: user.id,
        })
    }
}
