use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{UserProfileQuery, UserProfileView, UserRepository, UserRepositoryError},
    use_cases::select_stream::{SelectStreamError, SelectStreamUseCase},
};

pub struct SelectStreamService<R, P>
where
    R: UserRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    repository: R,
    profiles: P,
}

impl<R, P> SelectStreamService<R, P>
where
    R: UserRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    pub fn new(repository: R, profiles: P) -> Self {
        Self {
            repository,
            profiles,
        }
    }
}

#[async_trait]
impl<R, P> SelectStreamUseCase for SelectStreamService<R, P>
where
    R: UserRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        stream_id: Option<Uuid>,
    ) -> Result<UserProfileView, SelectStreamError> {
        self.repository
            .set_stream(user_id, stream_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SelectStreamError::UserNotFound,
                UserRepositoryError::UnknownStream => SelectStreamError::StreamNotFound,
                other => SelectStreamError::RepositoryError(other.to_string()),
            })?;

        debug!(user_id = %user_id, stream_id = ?stream_id, "Stream selected");

        self.profiles
            .profile(user_id)
            .await
            .map_err(|e| SelectStreamError::RepositoryError(e.to_string()))?
            .ok_or(SelectStreamError::UserNotFound)
    }
}
