use airport_booking_api::{
    models::user::{UserLoginRequest, UserRegistrationRequest},
    services::user_service::UserService,
    utils::error::AppError,
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use test_context::{test_context, AsyncTestContext};

mod common {
    pub mod test_utils;
}
use common::test_utils::TestDb;

struct UserServiceContext {
    db: TestDb,
    user_service: UserService,
}

impl UserServiceContext {
    fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}

#[async_trait]
impl AsyncTestContext for UserServiceContext {
    async fn setup() -> Self {
        let db = TestDb::new().await.expect("Failed to set up test database");
        let user_service = UserService::new(db.pool.clone());

        UserServiceContext { db, user_service }
    }

    async fn teardown(self) {}
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_user_registration_success(ctx: &UserServiceContext) -> Result<(), AppError> {
    let test_user = UserRegistrationRequest {
        username: "test_user_registration".to_string(),
        password: "test_password123".to_string(),
    };

    let user_id = ctx.user_service.register_user(test_user).await?;

    assert!(user_id > 0, "User ID should be positive");

    let (username, role, password): (String, String, String) =
        sqlx::query_as("SELECT username, role, password FROM user WHERE id = ?")
            .bind(user_id)
            .fetch_one(ctx.pool())
            .await?;

    assert_eq!(username, "test_user_registration");
    assert_eq!(role, "USER");
    // Stored hashed, never in the clear
    assert_ne!(password, "test_password123");

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_duplicate_username_is_a_conflict(ctx: &UserServiceContext) -> Result<(), AppError> {
    ctx.user_service
        .register_user(UserRegistrationRequest {
            username: "taken_name".to_string(),
            password: "test_password123".to_string(),
        })
        .await?;

    let result = ctx
        .user_service
        .register_user(UserRegistrationRequest {
            username: "taken_name".to_string(),
            password: "other_password456".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_login_returns_token_for_valid_credentials(
    ctx: &UserServiceContext,
) -> Result<(), AppError> {
    let user_id = ctx
        .user_service
        .register_user(UserRegistrationRequest {
            username: "login_user".to_string(),
            password: "test_password123".to_string(),
        })
        .await?;

    let response = ctx
        .user_service
        .login_user(UserLoginRequest {
            username: "login_user".to_string(),
            password: "test_password123".to_string(),
        })
        .await?;

    assert_eq!(response.user_id, user_id);
    assert!(!response.token.is_empty());

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_login_rejects_wrong_password(ctx: &UserServiceContext) -> Result<(), AppError> {
    ctx.user_service
        .register_user(UserRegistrationRequest {
            username: "cautious_user".to_string(),
            password: "test_password123".to_string(),
        })
        .await?;

    let result = ctx
        .user_service
        .login_user(UserLoginRequest {
            username: "cautious_user".to_string(),
            password: "wrong_password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::AuthError(_))));

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_login_rejects_unknown_username(ctx: &UserServiceContext) -> Result<(), AppError> {
    let result = ctx
        .user_service
        .login_user(UserLoginRequest {
            username: "ghost".to_string(),
            password: "whatever123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::AuthError(_))));

    Ok(())
}
