use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::Job;
use crate::catalog::application::ports::{
    incoming::use_cases::{CatalogAdminError, JobAdminUseCase, JobCommand},
    outgoing::JobRepository,
};

const KIND: &str = "Job";

#[derive(Debug, Clone)]
pub struct JobAdminService<R>
where
    R: JobRepository + Send + Sync,
{
    repository: R,
}

impl<R> JobAdminService<R>
where
    R: JobRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> JobAdminUseCase for JobAdminService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<Job>, CatalogAdminError> {
        self.repository
            .list()
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn create(&self, command: JobCommand) -> Result<Job, CatalogAdminError> {
        let job = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(job_id = %job.id, role_id = %job.role_id, "Job created");
        Ok(job)
    }

    async fn update(&self, id: Uuid, command: JobCommand) -> Result<Job, CatalogAdminError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::application::ports::outgoing::{CatalogRepositoryError, JobData};

    struct FailingJobRepository(CatalogRepositoryError);

    #[async_trait]
    impl JobRepository for FailingJobRepository {
        async fn list(&self) -> Result<Vec<Job>, CatalogRepositoryError> {
            Err(self.0.clone())
        }

        async fn create(&self, _data: JobData) -> Result<Job, CatalogRepositoryError> {
            Err(self.0.clone())
        }

        async fn update(&self, _id: Uuid, _data: JobData) -> Result<Job, CatalogRepositoryError> {
            Err(self.0.clone())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), CatalogRepositoryError> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn unknown_role_is_reported() {
        let service = JobAdminService::new(FailingJobRepository(
            CatalogRepositoryError::UnknownReference,
        ));
        let command = JobCommand::new(
            Some(Uuid::new_v4()),
            "Solidity Engineer".into(),
            "Polygon".into(),
            "20-30 LPA".into(),
            None,
            None,
            None,
        )
        .unwrap();

        let err = service.create(command).await.unwrap_err();

        assert_eq!(err, CatalogAdminError::UnknownReference("Job"));
    }

    #[tokio::test]
    async fn delete_missing_job_is_not_found() {
        let service = JobAdminService::new(FailingJobRepository(CatalogRepositoryError::NotFound));

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err, CatalogAdminError::NotFound("Job"));
    }
}
