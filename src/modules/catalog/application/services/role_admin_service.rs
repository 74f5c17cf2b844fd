use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::{Role, RoleAdminView};
use crate::catalog::application::ports::{
    incoming::use_cases::{CatalogAdminError, RoleAdminUseCase, RoleCommand},
    outgoing::RoleRepository,
};

const KIND: &str = "Role";

#[derive(Debug, Clone)]
pub struct RoleAdminService<R>
where
    R: RoleRepository + Send + Sync,
{
    repository: R,
}

impl<R> RoleAdminService<R>
where
    R: RoleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RoleAdminUseCase for RoleAdminService<R>
where
    R: RoleRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<RoleAdminView>, CatalogAdminError> {
        self.repository
            .list()
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn create(&self, command: RoleCommand) -> Result<Role, CatalogAdminError> {
        let role = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(role_id = %role.id, skills = role.skills.len(), "Role created");
        Ok(role)
    }

    async fn update(&self, id: Uuid, command: RoleCommand) -> Result<Role, CatalogAdminError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(role_id = %id, "Role deleted");
        Ok(())
    }
}
