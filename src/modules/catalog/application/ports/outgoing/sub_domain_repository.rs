use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogRepositoryError;
use crate::catalog::application::domain::{Certification, SubDomain, SubDomainView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDomainData {
    pub stream_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub recommended_certifications: Vec<Certification>,
}

#[async_trait]
pub trait SubDomainRepository: Send + Sync {
    /// Sub-domains with their parent stream embedded.
    async fn list(&self) -> Result<Vec<SubDomainView>, CatalogRepositoryError>;
    async fn create(&self, data: SubDomainData) -> Result<SubDomain, CatalogRepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        data: SubDomainData,
    ) -> Result<SubDomain, CatalogRepositoryError>;
    async fn replace_certifications(
        &self,
        id: Uuid,
        certifications: Vec<Certification>,
    ) -> Result<SubDomain, CatalogRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
