use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::{LoginLog, LoginStatus, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct NewLoginLog {
    pub user: Option<UserId>,
    pub email: String,
    pub user_name: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: LoginStatus,
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoginStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LoginLogRepository: Send + Sync {
    async fn record(&self, entry: NewLoginLog) -> Result<(), LoginLogRepositoryError>;

    /// Newest attempts first.
    async fn recent(&self, limit: u64) -> Result<Vec<LoginLog>, LoginLogRepositoryError>;

    async fn stats(&self) -> Result<LoginStats, LoginLogRepositoryError>;
}
