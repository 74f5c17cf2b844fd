use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub exam_url: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDomain {
    pub id: Uuid,
    #[serde(rename = "stream")]
    pub stream_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub recommended_certifications: Vec<Certification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    #[serde(rename = "subDomain")]
    pub sub_domain_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    #[serde(rename = "role")]
    pub role_id: Uuid,
    pub title: String,
    pub company: String,
    pub salary_range: String,
    pub location: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trims skill names, drops blanks and keeps the first occurrence of each name.
pub fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if skill.is_empty() || normalized.iter().any(|s| s == skill) {
            continue;
        }
        normalized.push(skill.to_string());
    }
    normalized
}
