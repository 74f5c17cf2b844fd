use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserAccount, UserId};

/// An account together with its stored password hash, for credential checks.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub account: UserAccount,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
