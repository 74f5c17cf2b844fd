use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::{RoleView, StreamWithSubDomains};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side used by the student-facing browse screens.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Every stream, ordered by name, with its sub-domains embedded.
    async fn streams_with_sub_domains(&self)
        -> Result<Vec<StreamWithSubDomains>, CatalogQueryError>;

    async fn career_path(
        &self,
        stream_id: Uuid,
    ) -> Result<Option<StreamWithSubDomains>, CatalogQueryError>;

    async fn roles_by_sub_domain(
        &self,
        sub_domain_id: Uuid,
    ) -> Result<Vec<RoleView>, CatalogQueryError>;
}
