use async_trait::async_trait;

use super::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::auth::application::domain::entities::{AuthSession, UserId};

#[derive(Debug, Clone)]
pub struct UpdatePasswordCommand {
    user_id: UserId,
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdatePasswordCommandError {
    #[error("Current password cannot be empty")]
    EmptyCurrentPassword,

    #[error("Password must be at least 5 characters")]
    PasswordTooShort,

    #[error("Password too long")]
    PasswordTooLong,
}

impl UpdatePasswordCommand {
    pub fn new(
        user_id: UserId,
        current_password: String,
        new_password: String,
    ) -> Result<Self, UpdatePasswordCommandError> {
        if current_password.is_empty() {
            return Err(UpdatePasswordCommandError::EmptyCurrentPassword);
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UpdatePasswordCommandError::PasswordTooShort);
        }
        if new_password.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(UpdatePasswordCommandError::PasswordTooLong);
        }

        Ok(Self {
            user_id,
            current_password,
            new_password,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Password is incorrect")]
    IncorrectPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdatePasswordCommand,
    ) -> Result<AuthSession, UpdatePasswordError>;
}
