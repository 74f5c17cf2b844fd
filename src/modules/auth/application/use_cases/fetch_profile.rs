use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::user_profile_query::UserProfileView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfileView, FetchProfileError>;
}
