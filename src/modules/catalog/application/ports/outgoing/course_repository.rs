use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogRepositoryError;
use crate::catalog::application::domain::{
    CertificateLink, Course, CourseLevel, Pricing, ResourceLink,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseData {
    pub title: String,
    pub slug: String,
    pub skill: String,
    pub stream_id: Option<Uuid>,
    pub sub_domain_id: Option<Uuid>,
    pub role_id: Option<Uuid>,
    pub pricing: Pricing,
    pub provider: String,
    pub duration: Option<String>,
    pub link: String,
    pub description: Option<String>,
    pub resource_links: Vec<ResourceLink>,
    pub certificate_links: Vec<CertificateLink>,
    pub target_companies: Vec<String>,
    pub level: CourseLevel,
    pub is_featured: bool,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Course>, CatalogRepositoryError>;
    async fn create(&self, data: CourseData) -> Result<Course, CatalogRepositoryError>;
    async fn update(&self, id: Uuid, data: CourseData) -> Result<Course, CatalogRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
