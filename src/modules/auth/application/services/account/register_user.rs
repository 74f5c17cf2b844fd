use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::{AuthSession, UserRole, DEFAULT_AVATAR},
    ports::outgoing::{
        CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
    },
    use_cases::register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
};

pub struct RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    repository: R,
    hasher: H,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    admin_emails: Vec<String>,
}

impl<R, H> RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    /// `admin_emails` are compared case-insensitively against the normalized email.
    pub fn new(
        repository: R,
        hasher: H,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        admin_emails: Vec<String>,
    ) -> Self {
        let admin_emails = admin_emails
            .into_iter()
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect();

        Self {
            repository,
            hasher,
            token_provider,
            admin_emails,
        }
    }

    fn role_for(&self, email: &str) -> UserRole {
        if self.admin_emails.iter().any(|admin| admin == email) {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }
}

#[async_trait]
impl<R, H> RegisterUserUseCase for RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            role: self.role_for(command.email()),
            avatar: DEFAULT_AVATAR.to_string(),
        };

        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_access_token(user.id.value(), user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, role = user.role.as_str(), "User registered");

        Ok(AuthSession { token, user })
    }
}
