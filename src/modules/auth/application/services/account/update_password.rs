use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::AuthSession,
    ports::outgoing::{
        PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
    },
    use_cases::update_password::{
        UpdatePasswordCommand, UpdatePasswordError, UpdatePasswordUseCase,
    },
};

pub struct UpdatePasswordService<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: H,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R, H> UpdatePasswordService<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: H,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R, H> UpdatePasswordUseCase for UpdatePasswordService<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdatePasswordCommand,
    ) -> Result<AuthSession, UpdatePasswordError> {
        let user = self
            .query
            .find_by_id(command.user_id())
            .await
            .map_err(|e| UpdatePasswordError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(command.current_password(), &user.password_hash)
            .await
            .map_err(|e| UpdatePasswordError::HashingFailed(e.to_string()))?;

        if !matches {
            return Err(UpdatePasswordError::IncorrectPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| UpdatePasswordError::HashingFailed(e.to_string()))?;

        let account = self
            .repository
            .update_password(command.user_id(), new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdatePasswordError::UserNotFound,
                other => UpdatePasswordError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_access_token(account.id.value(), account.role)
            .map_err(|e| UpdatePasswordError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %account.id, "Password updated");

        Ok(AuthSession {
            token,
            user: account,
        })
    }
}
