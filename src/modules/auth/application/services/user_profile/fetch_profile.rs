use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{UserProfileQuery, UserProfileView},
    use_cases::fetch_profile::{FetchProfileError, FetchProfileUseCase},
};

pub struct FetchProfileService<P>
where
    P: UserProfileQuery + Send + Sync,
{
    profiles: P,
}

impl<P> FetchProfileService<P>
where
    P: UserProfileQuery + Send + Sync,
{
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl<P> FetchProfileUseCase for FetchProfileService<P>
where
    P: UserProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfileView, FetchProfileError> {
        self.profiles
            .profile(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)
    }
}
