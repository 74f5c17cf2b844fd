use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_RESOURCE_LINKS: usize = 4;
pub const MAX_CERTIFICATE_LINKS: usize = 5;

/// A strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, PricingError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::NonPositiveAmount);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = PricingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseType {
    #[default]
    Free,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Amount is required for paid entries")]
    MissingAmount,

    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
}

/// Price of a course or of one of its links. Serialized as
/// `{"type": "Free"}` or `{"type": "Paid", "amount": 499.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pricing {
    Free,
    Paid { amount: Amount },
}

impl Pricing {
    /// Builds a price from the loose `type` + `amount` pair; free entries ignore the amount.
    pub fn from_parts(course_type: CourseType, amount: Option<f64>) -> Result<Self, PricingError> {
        match course_type {
            CourseType::Free => Ok(Pricing::Free),
            CourseType::Paid => {
                let amount = amount.ok_or(PricingError::MissingAmount)?;
                Ok(Pricing::Paid {
                    amount: Amount::new(amount)?,
                })
            }
        }
    }

    pub fn course_type(&self) -> CourseType {
        match self {
            Pricing::Free => CourseType::Free,
            Pricing::Paid { .. } => CourseType::Paid,
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Pricing::Free => None,
            Pricing::Paid { amount } => Some(amount.value()),
        }
    }
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Free => "Free",
            CourseType::Paid => "Paid",
        }
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" => Ok(CourseType::Free),
            "Paid" => Ok(CourseType::Paid),
            other => Err(format!("Unknown course type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(CourseLevel::Beginner),
            "Intermediate" => Ok(CourseLevel::Intermediate),
            "Advanced" => Ok(CourseLevel::Advanced),
            other => Err(format!("Unknown course level: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub pricing: Pricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateLink {
    pub label: String,
    pub url: String,
    #[serde(flatten)]
    pub pricing: Pricing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub skill: String,
    #[serde(rename = "stream")]
    pub stream_id: Option<Uuid>,
    #[serde(rename = "subDomain")]
    pub sub_domain_id: Option<Uuid>,
    #[serde(rename = "role")]
    pub role_id: Option<Uuid>,
    #[serde(flatten)]
    pub pricing: Pricing,
    pub provider: String,
    pub duration: Option<String>,
    pub link: String,
    pub description: Option<String>,
    pub resource_links: Vec<ResourceLink>,
    pub certificate_links: Vec<CertificateLink>,
    pub target_companies: Vec<String>,
    pub level: CourseLevel,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The slice of a course shown inside a user's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub skill: String,
    #[serde(flatten)]
    pub pricing: Pricing,
    pub provider: String,
    pub duration: Option<String>,
    pub link: String,
    pub description: Option<String>,
    pub role: Option<Uuid>,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            skill: course.skill.clone(),
            pricing: course.pricing,
            provider: course.provider.clone(),
            duration: course.duration.clone(),
            link: course.link.clone(),
            description: course.description.clone(),
            role: course.role_id,
        }
    }
}
