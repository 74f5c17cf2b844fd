use sea_orm::entity::prelude::*;

use super::RowDecodeError;
use crate::catalog::application::domain::{Course, CourseSummary, Pricing};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub skill: String,
    pub stream_id: Option<Uuid>,
    pub sub_domain_id: Option<Uuid>,
    pub role_id: Option<Uuid>,
    /// `Free` | `Paid`
    pub course_type: String,
    /// Present iff `course_type = 'Paid'` (enforced by `chk_courses_paid_amount`).
    pub amount: Option<f64>,
    pub provider: String,
    pub duration: Option<String>,
    pub link: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub resource_links: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub certificate_links: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub target_companies: Json,
    pub level: String,
    pub is_featured: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    fn pricing(&self) -> Result<Pricing, RowDecodeError> {
        let course_type = self.course_type.parse().map_err(RowDecodeError::Value)?;
        Pricing::from_parts(course_type, self.amount)
            .map_err(|e| RowDecodeError::Value(e.to_string()))
    }

    pub fn to_domain(&self) -> Result<Course, RowDecodeError> {
        Ok(Course {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            skill: self.skill.clone(),
            stream_id: self.stream_id,
            sub_domain_id: self.sub_domain_id,
            role_id: self.role_id,
            pricing: self.pricing()?,
            provider: self.provider.clone(),
            duration: self.duration.clone(),
            link: self.link.clone(),
            description: self.description.clone(),
            resource_links: serde_json::from_value(self.resource_links.clone())?,
            certificate_links: serde_json::from_value(self.certificate_links.clone())?,
            target_companies: serde_json::from_value(self.target_companies.clone())?,
            level: self.level.parse().map_err(RowDecodeError::Value)?,
            is_featured: self.is_featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }

    /// Skips the JSON link columns, which the summary never shows.
    pub fn to_summary(&self) -> Result<CourseSummary, RowDecodeError> {
        Ok(CourseSummary {
            id: self.id,
            title: self.title.clone(),
            skill: self.skill.clone(),
            pricing: self.pricing()?,
            provider: self.provider.clone(),
            duration: self.duration.clone(),
            link: self.link.clone(),
            description: self.description.clone(),
            role: self.role_id,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::streams::Entity",
        from = "Column::StreamId",
        to = "super::streams::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Stream,
    #[sea_orm(
        belongs_to = "super::sub_domains::Entity",
        from = "Column::SubDomainId",
        to = "super::sub_domains::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    SubDomain,
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RoleId",
        to = "super::roles::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Role,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}

#[cfg(test)]
impl Model {
    pub fn fixture(id: Uuid, title: &str, skill: &str) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            title: title.to_string(),
            slug: crate::shared::slug::slugify(title),
            skill: skill.to_string(),
            stream_id: None,
            sub_domain_id: None,
            role_id: None,
            course_type: "Free".to_string(),
            amount: None,
            provider: "Coursera".to_string(),
            duration: Some("4 weeks".to_string()),
            link: "https://example.com/course".to_string(),
            description: None,
            resource_links: serde_json::json!([]),
            certificate_links: serde_json::json!([]),
            target_companies: serde_json::json!([]),
            level: "Beginner".to_string(),
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }
}
