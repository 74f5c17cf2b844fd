use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::entities::{Certification, Role, Stream, SubDomain};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamWithSubDomains {
    #[serde(flatten)]
    pub stream: Stream,
    pub sub_domains: Vec<SubDomain>,
}

/// A sub-domain with its `stream` reference replaced by the stream record
/// (`null` when the stream is gone).
#[derive(Debug, Clone, PartialEq)]
pub struct SubDomainView {
    pub sub_domain: SubDomain,
    pub stream: Option<Stream>,
}

/// A role with its `subDomain` reference replaced by the sub-domain record.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleView {
    pub role: Role,
    pub sub_domain: Option<SubDomain>,
}

/// Like [`RoleView`], one level deeper: the sub-domain carries its stream.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleAdminView {
    pub role: Role,
    pub sub_domain: Option<SubDomainView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubDomainDto<'a, P> {
    id: Uuid,
    stream: P,
    name: &'a str,
    slug: &'a str,
    description: Option<&'a str>,
    recommended_certifications: &'a [Certification],
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Serialized shape of a role whose `subDomain` field holds `P`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedRole<'a, P> {
    id: Uuid,
    sub_domain: P,
    title: &'a str,
    description: Option<&'a str>,
    skills: &'a [String],
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a, P> PopulatedRole<'a, P> {
    pub fn new(role: &'a Role, sub_domain: P) -> Self {
        Self {
            id: role.id,
            sub_domain,
            title: &role.title,
            description: role.description.as_deref(),
            skills: &role.skills,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

impl Serialize for SubDomainView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sub_domain = &self.sub_domain;
        SubDomainDto {
            id: sub_domain.id,
            stream: &self.stream,
            name: &sub_domain.name,
            slug: &sub_domain.slug,
            description: sub_domain.description.as_deref(),
            recommended_certifications: &sub_domain.recommended_certifications,
            created_at: sub_domain.created_at,
            updated_at: sub_domain.updated_at,
        }
        .serialize(serializer)
    }
}

impl Serialize for RoleView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PopulatedRole::new(&self.role, &self.sub_domain).serialize(serializer)
    }
}

impl Serialize for RoleAdminView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PopulatedRole::new(&self.role, &self.sub_domain).serialize(serializer)
    }
}
