use async_trait::async_trait;
use uuid::Uuid;

use super::{clean_optional, CatalogAdminError, MAX_NAME_LENGTH};
use crate::catalog::application::domain::{Certification, SubDomain, SubDomainView};
use crate::catalog::application::ports::outgoing::SubDomainData;
use crate::shared::slug::slug_or_derive;

//
// ──────────────────────────────────────────────────────────
// Sub-domain Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubDomainCommand {
    data: SubDomainData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubDomainCommandError {
    #[error("Stream is required")]
    MissingStream,

    #[error("Name is required")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Slug must contain at least one letter or digit")]
    InvalidSlug,

    #[error("Certification #{0} has no name")]
    UnnamedCertification(usize),
}

/// Trims every certification field; optional fields that end up blank become `None`.
fn normalize_certifications(
    certifications: Vec<Certification>,
) -> Result<Vec<Certification>, SubDomainCommandError> {
    certifications
        .into_iter()
        .enumerate()
        .map(|(i, cert)| {
            let name = cert.name.trim();
            if name.is_empty() {
                return Err(SubDomainCommandError::UnnamedCertification(i + 1));
            }
            Ok(Certification {
                name: name.to_string(),
                issuer: clean_optional(cert.issuer),
                level: clean_optional(cert.level),
                exam_url: clean_optional(cert.exam_url),
                fee: clean_optional(cert.fee),
            })
        })
        .collect()
}

impl SubDomainCommand {
    pub fn new(
        stream_id: Option<Uuid>,
        name: String,
        slug: Option<String>,
        description: Option<String>,
        certifications: Vec<Certification>,
    ) -> Result<Self, SubDomainCommandError> {
        let stream_id = stream_id.ok_or(SubDomainCommandError::MissingStream)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SubDomainCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(SubDomainCommandError::NameTooLong);
        }

        let slug = slug_or_derive(slug.as_deref(), name);
        if slug.is_empty() {
            return Err(SubDomainCommandError::InvalidSlug);
        }

        Ok(Self {
            data: SubDomainData {
                stream_id,
                name: name.to_string(),
                slug,
                description: clean_optional(description),
                recommended_certifications: normalize_certifications(certifications)?,
            },
        })
    }

    pub fn data(&self) -> &SubDomainData {
        &self.data
    }

    pub fn into_data(self) -> SubDomainData {
        self.data
    }
}

/// Replacement list for a sub-domain's recommended certifications.
#[derive(Debug, Clone)]
pub struct CertificationsCommand {
    certifications: Vec<Certification>,
}

impl CertificationsCommand {
    pub fn new(certifications: Vec<Certification>) -> Result<Self, SubDomainCommandError> {
        Ok(Self {
            certifications: normalize_certifications(certifications)?,
        })
    }

    pub fn into_certifications(self) -> Vec<Certification> {
        self.certifications
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubDomainAdminUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<SubDomainView>, CatalogAdminError>;
    async fn create(&self, command: SubDomainCommand) -> Result<SubDomain, CatalogAdminError>;
    async fn update(
        &self,
        id: Uuid,
        command: SubDomainCommand,
    ) -> Result<SubDomain, CatalogAdminError>;
    async fn replace_certifications(
        &self,
        id: Uuid,
        command: CertificationsCommand,
    ) -> Result<SubDomain, CatalogAdminError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError>;
}
