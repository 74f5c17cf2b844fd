use async_trait::async_trait;

use crate::auth::application::{
    ports::outgoing::LoginLogRepository,
    use_cases::list_login_logs::{
        ListLoginLogsError, ListLoginLogsQuery, ListLoginLogsUseCase, LoginLogReport,
    },
};

pub struct ListLoginLogsService<L>
where
    L: LoginLogRepository + Send + Sync,
{
    login_logs: L,
}

impl<L> ListLoginLogsService<L>
where
    L: LoginLogRepository + Send + Sync,
{
    pub fn new(login_logs: L) -> Self {
        Self { login_logs }
    }
}

#[async_trait]
impl<L> ListLoginLogsUseCase for ListLoginLogsService<L>
where
    L: LoginLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        query: ListLoginLogsQuery,
    ) -> Result<LoginLogReport, ListLoginLogsError> {
        let (logs, stats) = futures::try_join!(
            self.login_logs.recent(query.limit()),
            self.login_logs.stats()
        )
        .map_err(|e| ListLoginLogsError::RepositoryError(e.to_string()))?;

        Ok(LoginLogReport { logs, stats })
    }
}
