use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::user_profile_query::UserProfileView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectStreamError {
    #[error("User not found")]
    UserNotFound,

    #[error("Stream not found")]
    StreamNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Sets or clears (`None`) the stream a user follows.
#[async_trait]
pub trait SelectStreamUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        stream_id: Option<Uuid>,
    ) -> Result<UserProfileView, SelectStreamError>;
}
