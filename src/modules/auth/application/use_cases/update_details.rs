use async_trait::async_trait;

use super::MAX_NAME_LENGTH;
use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::user_profile_query::UserProfileView,
};

#[derive(Debug, Clone)]
pub struct UpdateDetailsCommand {
    user_id: UserId,
    name: Option<String>,
    avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateDetailsCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Avatar cannot be empty")]
    EmptyAvatar,
}

impl UpdateDetailsCommand {
    pub fn new(
        user_id: UserId,
        name: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, UpdateDetailsCommandError> {
        let name = match name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(UpdateDetailsCommandError::EmptyName);
                }
                if name.chars().count() > MAX_NAME_LENGTH {
                    return Err(UpdateDetailsCommandError::NameTooLong);
                }
                Some(name.to_string())
            }
            None => None,
        };

        let avatar = match avatar {
            Some(avatar) if avatar.trim().is_empty() => {
                return Err(UpdateDetailsCommandError::EmptyAvatar)
            }
            Some(avatar) => Some(avatar.trim().to_string()),
            None => None,
        };

        Ok(Self {
            user_id,
            name,
            avatar,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateDetailsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateDetailsCommand,
    ) -> Result<UserProfileView, UpdateDetailsError>;
}
