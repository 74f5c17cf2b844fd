use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::{
    domain::entities::LoginLog, ports::outgoing::login_log_repository::LoginStats,
};

pub const DEFAULT_LOGIN_LOG_LIMIT: u64 = 100;
pub const MAX_LOGIN_LOG_LIMIT: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLoginLogsQuery {
    limit: u64,
}

impl ListLoginLogsQuery {
    /// Missing limits fall back to the default; the rest are clamped into `1..=500`.
    pub fn new(limit: Option<u64>) -> Self {
        let limit = limit
            .unwrap_or(DEFAULT_LOGIN_LOG_LIMIT)
            .clamp(1, MAX_LOGIN_LOG_LIMIT);
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginLogReport {
    pub logs: Vec<LoginLog>,
    pub stats: LoginStats,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListLoginLogsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListLoginLogsUseCase: Send + Sync {
    async fn execute(&self, query: ListLoginLogsQuery)
        -> Result<LoginLogReport, ListLoginLogsError>;
}
