use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogRepositoryError;
use crate::catalog::application::domain::Stream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamData {
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[async_trait]
pub trait StreamRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Stream>, CatalogRepositoryError>;
    async fn create(&self, data: StreamData) -> Result<Stream, CatalogRepositoryError>;
    async fn update(&self, id: Uuid, data: StreamData) -> Result<Stream, CatalogRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
