use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

/// Input for persisting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Account with this email already exists")]
    EmailAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Rotate (or clear, with `None`) the refresh token stored on the row.
    async fn store_refresh_token(
        &self,
        user_id: Uuid,
        token: Option<String>,
    ) -> Result<(), UserRepositoryError>;

    async fn confirm_email(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn update_avatar(&self, user_id: Uuid, url: String) -> Result<User, UserRepositoryError>;
}
