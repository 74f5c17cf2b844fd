use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserAccount, UserId, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub avatar: String,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDetailsData {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Stream not found")]
    UnknownStream,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserAccount, UserRepositoryError>;

    async fn update_details(
        &self,
        user_id: UserId,
        data: UpdateDetailsData,
    ) -> Result<UserAccount, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<UserAccount, UserRepositoryError>;

    async fn set_stream(
        &self,
        user_id: UserId,
        stream_id: Option<Uuid>,
    ) -> Result<UserAccount, UserRepositoryError>;
}
