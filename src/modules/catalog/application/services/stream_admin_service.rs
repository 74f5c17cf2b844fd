use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::Stream;
use crate::catalog::application::ports::{
    incoming::use_cases::{CatalogAdminError, StreamAdminUseCase, StreamCommand},
    outgoing::StreamRepository,
};

const KIND: &str = "Stream";

#[derive(Debug, Clone)]
pub struct StreamAdminService<R>
where
    R: StreamRepository + Send + Sync,
{
    repository: R,
}

impl<R> StreamAdminService<R>
where
    R: StreamRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> StreamAdminUseCase for StreamAdminService<R>
where
    R: StreamRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<Stream>, CatalogAdminError> {
        self.repository
            .list()
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn create(&self, command: StreamCommand) -> Result<Stream, CatalogAdminError> {
        let stream = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(stream_id = %stream.id, slug = %stream.slug, "Stream created");
        Ok(stream)
    }

    async fn update(&self, id: Uuid, command: StreamCommand) -> Result<Stream, CatalogAdminError> {
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

        info!(stream_id = %id, "Stream deleted");
        Ok(())
    }
}
