mod browse_catalog;
mod manage_courses;
mod manage_jobs;
mod manage_roles;
mod manage_streams;
mod manage_sub_domains;

pub use browse_catalog::{BrowseCatalogError, BrowseCatalogUseCase};
pub use manage_courses::{
    CourseAdminUseCase, CourseCommand, CourseCommandError, CourseInput, LinkInput,
};
pub use manage_jobs::{JobAdminUseCase, JobCommand, JobCommandError};
pub use manage_roles::{RoleAdminUseCase, RoleCommand, RoleCommandError};
pub use manage_streams::{StreamAdminUseCase, StreamCommand, StreamCommandError};
pub use manage_sub_domains::{
    CertificationsCommand, SubDomainAdminUseCase, SubDomainCommand, SubDomainCommandError,
};

use crate::catalog::application::ports::outgoing::CatalogRepositoryError;

pub(crate) const MAX_NAME_LENGTH: usize = 150;
pub(crate) const MAX_TITLE_LENGTH: usize = 200;

/// Error returned by every admin catalog operation. The payload names the
/// record kind involved ("Stream", "Role", ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogAdminError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("{0} still has dependent records")]
    HasDependents(&'static str),

    #[error("{0} references a record that does not exist")]
    UnknownReference(&'static str),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl CatalogAdminError {
    pub fn from_repository(kind: &'static str, err: CatalogRepositoryError) -> Self {
        match err {
            CatalogRepositoryError::NotFound => Self::NotFound(kind),
            CatalogRepositoryError::AlreadyExists => Self::AlreadyExists(kind),
            CatalogRepositoryError::HasDependents => Self::HasDependents(kind),
            CatalogRepositoryError::UnknownReference => Self::UnknownReference(kind),
            CatalogRepositoryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

/// Trims and drops empty optional text.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
