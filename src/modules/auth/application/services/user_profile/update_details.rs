use async_trait::async_trait;

use crate::auth::application::{
    ports::outgoing::{
        UpdateDetailsData, UserProfileQuery, UserProfileView, UserRepository,
        UserRepositoryError,
    },
    use_cases::update_details::{UpdateDetailsCommand, UpdateDetailsError, UpdateDetailsUseCase},
};

pub struct UpdateDetailsService<R, P>
where
    R: UserRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    repository: R,
    profiles: P,
}

impl<R, P> UpdateDetailsService<R, P>
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
impl<R, P> UpdateDetailsUseCase for UpdateDetailsService<R, P>
where
    R: UserRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateDetailsCommand,
    ) -> Result<UserProfileView, UpdateDetailsError> {
        let data = UpdateDetailsData {
            name: command.name().map(str::to_string),
            avatar: command.avatar().map(str::to_string),
        };

        self.repository
            .update_details(command.user_id(), data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateDetailsError::UserNotFound,
                other => UpdateDetailsError::RepositoryError(other.to_string()),
            })?;

        self.profiles
            .profile(command.user_id())
            .await
            .map_err(|e| UpdateDetailsError::RepositoryError(e.to_string()))?
            .ok_or(UpdateDetailsError::UserNotFound)
    }
}
