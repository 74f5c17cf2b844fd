use sea_orm::entity::prelude::*;

use crate::catalog::application::domain::Stream;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "streams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Stream {
        Stream {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_domains::Entity")]
    SubDomains,
}

impl Related<super::sub_domains::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubDomains.def()
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
    pub fn fixture(id: Uuid, name: &str, slug: &str) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: format!("{name} stream"),
            created_at: now,
            updated_at: now,
        }
    }
}
