use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::{RoleView, StreamWithSubDomains};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseCatalogError {
    #[error("Stream not found")]
    StreamNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn list_streams(&self) -> Result<Vec<StreamWithSubDomains>, BrowseCatalogError>;

    async fn career_path(&self, stream_id: Uuid)
        -> Result<StreamWithSubDomains, BrowseCatalogError>;

    async fn roles_by_sub_domain(
        &self,
        sub_domain_id: Uuid,
    ) -> Result<Vec<RoleView>, BrowseCatalogError>;
}
