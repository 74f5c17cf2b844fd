use async_trait::async_trait;
use uuid::Uuid;

use super::{clean_optional, CatalogAdminError, MAX_TITLE_LENGTH};
use crate::catalog::application::domain::course::{MAX_CERTIFICATE_LINKS, MAX_RESOURCE_LINKS};
use crate::catalog::application::domain::{
    CertificateLink, Course, CourseLevel, CourseType, Pricing, PricingError, ResourceLink,
};
use crate::catalog::application::ports::outgoing::CourseData;
use crate::shared::slug::slugify;

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

/// An extra link as sent by the admin form, price still in loose `type` + `amount` form.
#[derive(Debug, Clone, Default)]
pub struct LinkInput {
    pub label: String,
    pub url: String,
    pub provider: Option<String>,
    pub course_type: CourseType,
    pub amount: Option<f64>,
}

/// Unvalidated course fields.
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub title: String,
    pub skill: String,
    pub stream_id: Option<Uuid>,
    pub sub_domain_id: Option<Uuid>,
    pub role_id: Option<Uuid>,
    pub course_type: CourseType,
    pub amount: Option<f64>,
    pub provider: String,
    pub duration: Option<String>,
    pub link: String,
    pub description: Option<String>,
    pub resource_links: Vec<LinkInput>,
    pub certificate_links: Vec<LinkInput>,
    pub target_companies: Vec<String>,
    pub level: Option<CourseLevel>,
    pub is_featured: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Course Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CourseCommand {
    data: CourseData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseCommandError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Title must contain at least one letter or digit")]
    InvalidSlug,

    #[error("Skill is required")]
    EmptySkill,

    #[error("Provider is required")]
    EmptyProvider,

    #[error("Link is required")]
    EmptyLink,

    #[error("Course price: {0}")]
    InvalidPricing(PricingError),

    #[error("At most {MAX_RESOURCE_LINKS} resource links are allowed")]
    TooManyResourceLinks,

    #[error("At most {MAX_CERTIFICATE_LINKS} certificate links are allowed")]
    TooManyCertificateLinks,

    #[error("Link #{0} needs both a label and a url")]
    IncompleteLink(usize),

    #[error("Link #{0} price: {1}")]
    InvalidLinkPricing(usize, PricingError),
}

fn required(value: &str, err: CourseCommandError) -> Result<String, CourseCommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(err);
    }
    Ok(value.to_string())
}

/// Validates one extra link; `position` is 1-based and counts across both link lists.
fn checked_link(
    position: usize,
    link: &LinkInput,
) -> Result<(String, String, Pricing), CourseCommandError> {
    let label = link.label.trim();
    let url = link.url.trim();
    if label.is_empty() || url.is_empty() {
        return Err(CourseCommandError::IncompleteLink(position));
    }
    let pricing = Pricing::from_parts(link.course_type, link.amount)
        .map_err(|e| CourseCommandError::InvalidLinkPricing(position, e))?;
    Ok((label.to_string(), url.to_string(), pricing))
}

impl CourseCommand {
    pub fn new(input: CourseInput) -> Result<Self, CourseCommandError> {
        let title = required(&input.title, CourseCommandError::EmptyTitle)?;
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CourseCommandError::TitleTooLong);
        }
        let slug = slugify(&title);
        if slug.is_empty() {
            return Err(CourseCommandError::InvalidSlug);
        }

        let skill = required(&input.skill, CourseCommandError::EmptySkill)?;
        let provider = required(&input.provider, CourseCommandError::EmptyProvider)?;
        let link = required(&input.link, CourseCommandError::EmptyLink)?;

        let pricing = Pricing::from_parts(input.course_type, input.amount)
            .map_err(CourseCommandError::InvalidPricing)?;

        if input.resource_links.len() > MAX_RESOURCE_LINKS {
            return Err(CourseCommandError::TooManyResourceLinks);
        }
        if input.certificate_links.len() > MAX_CERTIFICATE_LINKS {
            return Err(CourseCommandError::TooManyCertificateLinks);
        }

        let resource_links = input
            .resource_links
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let (label, url, pricing) = checked_link(i + 1, l)?;
                Ok(ResourceLink {
                    label,
                    url,
                    provider: clean_optional(l.provider.clone()),
                    pricing,
                })
            })
            .collect::<Result<Vec<_>, CourseCommandError>>()?;

        let offset = resource_links.len();
        let certificate_links = input
            .certificate_links
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let (label, url, pricing) = checked_link(offset + i + 1, l)?;
                Ok(CertificateLink {
                    label,
                    url,
                    pricing,
                })
            })
            .collect::<Result<Vec<_>, CourseCommandError>>()?;

        let mut target_companies: Vec<String> = Vec::new();
        for company in input.target_companies {
            let company = company.trim();
            if !company.is_empty() && !target_companies.iter().any(|c| c == company) {
                target_companies.push(company.to_string());
            }
        }

        Ok(Self {
            data: CourseData {
                title,
                slug,
                skill,
                stream_id: input.stream_id,
                sub_domain_id: input.sub_domain_id,
                role_id: input.role_id,
                pricing,
                provider,
                duration: clean_optional(input.duration),
                link,
                description: clean_optional(input.description),
                resource_links,
                certificate_links,
                target_companies,
                level: input.level.unwrap_or_default(),
                is_featured: input.is_featured.unwrap_or(false),
            },
        })
    }

    pub fn data(&self) -> &CourseData {
        &self.data
    }

    pub fn into_data(self) -> CourseData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CourseAdminUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, CatalogAdminError>;
    async fn create(&self, command: CourseCommand) -> Result<Course, CatalogAdminError>;
    async fn update(&self, id: Uuid, command: CourseCommand)
        -> Result<Course, CatalogAdminError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError>;
}
