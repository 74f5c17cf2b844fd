use async_trait::async_trait;
use email_address::EmailAddress;

use super::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::auth::application::domain::entities::AuthSession;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 5 characters")]
    PasswordTooShort,

    #[error("Password too long")]
    PasswordTooLong,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterUserCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RegisterUserCommandError::NameTooLong);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterUserCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserCommandError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }
        if password.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}
