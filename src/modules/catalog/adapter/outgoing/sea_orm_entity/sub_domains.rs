use sea_orm::entity::prelude::*;

use super::RowDecodeError;
use crate::catalog::application::domain::{Certification, SubDomain};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sub_domains")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub stream_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    /// `[{name, issuer, level, examUrl, fee}]`
    #[sea_orm(column_type = "JsonBinary")]
    pub recommended_certifications: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<SubDomain, RowDecodeError> {
        let recommended_certifications: Vec<Certification> =
            serde_json::from_value(self.recommended_certifications.clone())?;

        Ok(SubDomain {
            id: self.id,
            stream_id: self.stream_id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            recommended_certifications,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
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
        on_delete = "Restrict"
    )]
    Stream,
    #[sea_orm(has_many = "super::roles::Entity")]
    Roles,
}

impl Related<super::streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stream.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
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
    pub fn fixture(id: Uuid, stream_id: Uuid, name: &str, slug: &str) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            stream_id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            recommended_certifications: serde_json::json!([]),
            created_at: now,
            updated_at: now,
        }
    }
}
