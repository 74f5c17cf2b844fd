use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogRepositoryError;
use crate::catalog::application::domain::{Role, RoleAdminView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleData {
    pub sub_domain_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Roles with their sub-domain and that sub-domain's stream embedded.
    async fn list(&self) -> Result<Vec<RoleAdminView>, CatalogRepositoryError>;
    async fn create(&self, data: RoleData) -> Result<Role, CatalogRepositoryError>;
    async fn update(&self, id: Uuid, data: RoleData) -> Result<Role, CatalogRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
