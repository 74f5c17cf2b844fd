use sea_orm::entity::prelude::*;

use super::RowDecodeError;
use crate::catalog::application::domain::Role;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sub_domain_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// `["Solidity", "Web3"]`
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Role, RowDecodeError> {
        Ok(Role {
            id: self.id,
            sub_domain_id: self.sub_domain_id,
            title: self.title.clone(),
            description: self.description.clone(),
            skills: serde_json::from_value(self.skills.clone())?,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_domains::Entity",
        from = "Column::SubDomainId",
        to = "super::sub_domains::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SubDomain,
    #[sea_orm(has_many = "super::jobs::Entity")]
    Jobs,
}

impl Related<super::sub_domains::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubDomain.def()
    }
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
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
    pub fn fixture(id: Uuid, sub_domain_id: Uuid, title: &str, skills: &[&str]) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            sub_domain_id,
            title: title.to_string(),
            description: None,
            skills: serde_json::json!(skills),
            created_at: now,
            updated_at: now,
        }
    }
}
