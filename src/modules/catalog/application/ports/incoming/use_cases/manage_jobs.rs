use async_trait::async_trait;
use uuid::Uuid;

use super::{clean_optional, CatalogAdminError, MAX_TITLE_LENGTH};
use crate::catalog::application::domain::Job;
use crate::catalog::application::ports::outgoing::JobData;

#[derive(Debug, Clone)]
pub struct JobCommand {
    data: JobData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobCommandError {
    #[error("Role is required")]
    MissingRole,

    #[error("Title is required")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Company is required")]
    EmptyCompany,

    #[error("Salary range is required")]
    EmptySalaryRange,
}

impl JobCommand {
    pub fn new(
        role_id: Option<Uuid>,
        title: String,
        company: String,
        salary_range: String,
        location: Option<String>,
        link: Option<String>,
        description: Option<String>,
    ) -> Result<Self, JobCommandError> {
        let role_id = role_id.ok_or(JobCommandError::MissingRole)?;

        let title = title.trim();
        if title.is_empty() {
            return Err(JobCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(JobCommandError::TitleTooLong);
        }

        let company = company.trim();
        if company.is_empty() {
            return Err(JobCommandError::EmptyCompany);
        }

        let salary_range = salary_range.trim();
        if salary_range.is_empty() {
            return Err(JobCommandError::EmptySalaryRange);
        }

        Ok(Self {
            data: JobData {
                role_id,
                title: title.to_string(),
                company: company.to_string(),
                salary_range: salary_range.to_string(),
                location: clean_optional(location),
                link: clean_optional(link),
                description: clean_optional(description),
            },
        })
    }

    pub fn data(&self) -> &JobData {
        &self.data
    }

    pub fn into_data(self) -> JobData {
        self.data
    }
}

#[async_trait]
pub trait JobAdminUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Job>, CatalogAdminError>;
    async fn create(&self, command: JobCommand) -> Result<Job, CatalogAdminError>;
    async fn update(&self, id: Uuid, command: JobCommand) -> Result<Job, CatalogAdminError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError>;
}
