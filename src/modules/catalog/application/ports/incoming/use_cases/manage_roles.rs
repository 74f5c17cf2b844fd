use async_trait::async_trait;
use uuid::Uuid;

use super::{clean_optional, CatalogAdminError, MAX_NAME_LENGTH};
use crate::catalog::application::domain::{normalize_skills, Role, RoleAdminView};
use crate::catalog::application::ports::outgoing::RoleData;

#[derive(Debug, Clone)]
pub struct RoleCommand {
    data: RoleData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleCommandError {
    #[error("Sub-domain is required")]
    MissingSubDomain,

    #[error("Title is required")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,
}

impl RoleCommand {
    pub fn new(
        sub_domain_id: Option<Uuid>,
        title: String,
        description: Option<String>,
        skills: Vec<String>,
    ) -> Result<Self, RoleCommandError> {
        let sub_domain_id = sub_domain_id.ok_or(RoleCommandError::MissingSubDomain)?;

        let title = title.trim();
        if title.is_empty() {
            return Err(RoleCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_NAME_LENGTH {
            return Err(RoleCommandError::TitleTooLong);
        }

        Ok(Self {
            data: RoleData {
                sub_domain_id,
                title: title.to_string(),
                description: clean_optional(description),
                skills: normalize_skills(skills),
            },
        })
    }

    pub fn data(&self) -> &RoleData {
        &self.data
    }

    pub fn into_data(self) -> RoleData {
        self.data
    }
}

#[async_trait]
pub trait RoleAdminUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<RoleAdminView>, CatalogAdminError>;
    async fn create(&self, command: RoleCommand) -> Result<Role, CatalogAdminError>;
    async fn update(&self, id: Uuid, command: RoleCommand) -> Result<Role, CatalogAdminError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError>;
}
