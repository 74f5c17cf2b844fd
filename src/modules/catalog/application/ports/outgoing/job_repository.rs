use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogRepositoryError;
use crate::catalog::application::domain::Job;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobData {
    pub role_id: Uuid,
    pub title: String,
    pub company: String,
    pub salary_range: String,
    pub location: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Job>, CatalogRepositoryError>;
    async fn create(&self, data: JobData) -> Result<Job, CatalogRepositoryError>;
    async fn update(&self, id: Uuid, data: JobData) -> Result<Job, CatalogRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
