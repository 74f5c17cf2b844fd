use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::{SubDomain, SubDomainView};
use crate::catalog::application::ports::{
    incoming::use_cases::{
        CatalogAdminError, CertificationsCommand, SubDomainAdminUseCase, SubDomainCommand,
    },
    outgoing::SubDomainRepository,
};

const KIND: &str = "Sub-domain";

#[derive(Debug, Clone)]
pub struct SubDomainAdminService<R>
where
    R: SubDomainRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubDomainAdminService<R>
where
    R: SubDomainRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubDomainAdminUseCase for SubDomainAdminService<R>
where
    R: SubDomainRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<SubDomainView>, CatalogAdminError> {
        self.repository
            .list()
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn create(&self, command: SubDomainCommand) -> Result<SubDomain, CatalogAdminError> {
        let sub_domain = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(
            sub_domain_id = %sub_domain.id,
            stream_id = %sub_domain.stream_id,
            "Sub-domain created"
        );
        Ok(sub_domain)
    }

    async fn update(
        &self,
        id: Uuid,
        command: SubDomainCommand,
    ) -> Result<SubDomain, CatalogAdminError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn replace_certifications(
        &self,
        id: Uuid,
        command: CertificationsCommand,
    ) -> Result<SubDomain, CatalogAdminError> {
        self.repository
            .replace_certifications(id, command.into_certifications())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(sub_domain_id = %id, "Sub-domain deleted");
        Ok(())
    }
}
