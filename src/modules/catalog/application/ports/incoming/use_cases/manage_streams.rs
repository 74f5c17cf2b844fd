use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogAdminError, MAX_NAME_LENGTH};
use crate::catalog::application::domain::Stream;
use crate::catalog::application::ports::outgoing::StreamData;
use crate::shared::slug::slug_or_derive;

//
// ──────────────────────────────────────────────────────────
// Stream Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StreamCommand {
    data: StreamData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamCommandError {
    #[error("Name is required")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Slug must contain at least one letter or digit")]
    InvalidSlug,
}

impl StreamCommand {
    pub fn new(
        name: String,
        slug: Option<String>,
        description: String,
    ) -> Result<Self, StreamCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StreamCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(StreamCommandError::NameTooLong);
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(StreamCommandError::EmptyDescription);
        }

        let slug = slug_or_derive(slug.as_deref(), name);
        if slug.is_empty() {
            return Err(StreamCommandError::InvalidSlug);
        }

        Ok(Self {
            data: StreamData {
                name: name.to_string(),
                slug,
                description: description.to_string(),
            },
        })
    }

    pub fn data(&self) -> &StreamData {
        &self.data
    }

    pub fn into_data(self) -> StreamData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait StreamAdminUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Stream>, CatalogAdminError>;
    async fn create(&self, command: StreamCommand) -> Result<Stream, CatalogAdminError>;
    async fn update(&self, id: Uuid, command: StreamCommand)
        -> Result<Stream, CatalogAdminError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError>;
}
