use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::{AuthSession, LoginStatus, UserId},
    ports::outgoing::{LoginLogRepository, NewLoginLog, PasswordHasher, TokenProvider, UserQuery},
    use_cases::login_user::{LoginCommand, LoginError, LoginUserUseCase},
};

const UNKNOWN_USER_NAME: &str = "Unknown";
const REASON_USER_NOT_FOUND: &str = "User not found";
const REASON_INVALID_PASSWORD: &str = "Invalid password";

pub struct LoginUserService<Q, H, L>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    L: LoginLogRepository + Send + Sync,
{
    query: Q,
    hasher: H,
    login_logs: L,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, H, L> LoginUserService<Q, H, L>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    L: LoginLogRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: H,
        login_logs: L,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            login_logs,
            token_provider,
        }
    }

    /// A failed audit write never changes the login outcome.
    async fn audit(
        &self,
        command: &LoginCommand,
        user: Option<(UserId, &str)>,
        status: LoginStatus,
        failure_reason: Option<&str>,
    ) {
        let entry = NewLoginLog {
            user: user.map(|(id, _)| id),
            email: command.email().to_string(),
            user_name: user
                .map(|(_, name)| name)
                .unwrap_or(UNKNOWN_USER_NAME)
                .to_string(),
            ip_address: command.ip_address().map(str::to_string),
            user_agent: command.user_agent().map(str::to_string),
            status,
            failure_reason: failure_reason.map(str::to_string),
        };

        if let Err(e) = self.login_logs.record(entry).await {
            warn!(email = command.email(), "Failed to record login attempt: {}", e);
        }
    }
}

#[async_trait]
impl<Q, H, L> LoginUserUseCase for LoginUserService<Q, H, L>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    L: LoginLogRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let found = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(found) = found else {
            self.audit(&command, None, LoginStatus::Failed, Some(REASON_USER_NOT_FOUND))
                .await;
            return Err(LoginError::InvalidCredentials);
        };

        let user = found.account;
        let matches = self
            .hasher
            .verify_password(command.password(), &found.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !matches {
            self.audit(
                &command,
                Some((user.id, user.name.as_str())),
                LoginStatus::Failed,
                Some(REASON_INVALID_PASSWORD),
            )
            .await;
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id.value(), user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        self.audit(&command, Some((user.id, user.name.as_str())), LoginStatus::Success, None)
            .await;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }
}
