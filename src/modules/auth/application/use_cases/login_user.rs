use async_trait::async_trait;

use crate::auth::application::domain::entities::AuthSession;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(
        email: String,
        password: String,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, LoginCommandError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
            ip_address,
            user_agent,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password look the same to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}
