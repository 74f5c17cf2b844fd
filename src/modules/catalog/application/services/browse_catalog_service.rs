use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::{RoleView, StreamWithSubDomains};
use crate::catalog::application::ports::{
    incoming::use_cases::{BrowseCatalogError, BrowseCatalogUseCase},
    outgoing::{CatalogQuery, CatalogQueryError},
};

#[derive(Debug, Clone)]
pub struct BrowseCatalogService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> BrowseCatalogService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl From<CatalogQueryError> for BrowseCatalogError {
    fn from(err: CatalogQueryError) -> Self {
        match err {
            CatalogQueryError::DatabaseError(msg) => BrowseCatalogError::QueryFailed(msg),
        }
    }
}

#[async_trait]
impl<Q> BrowseCatalogUseCase for BrowseCatalogService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn list_streams(&self) -> Result<Vec<StreamWithSubDomains>, BrowseCatalogError> {
        Ok(self.query.streams_with_sub_domains().await?)
    }

    async fn career_path(
        &self,
        stream_id: Uuid,
    ) -> Result<StreamWithSubDomains, BrowseCatalogError> {
        self.query
            .career_path(stream_id)
            .await?
            .ok_or(BrowseCatalogError::StreamNotFound)
    }

    async fn roles_by_sub_domain(
        &self,
        sub_domain_id: Uuid,
    ) -> Result<Vec<RoleView>, BrowseCatalogError> {
        Ok(self.query.roles_by_sub_domain(sub_domain_id).await?)
    }
}
