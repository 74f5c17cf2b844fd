use sea_orm::entity::prelude::*;

use crate::catalog::application::domain::Job;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub role_id: Uuid,
    pub title: String,
    pub company: String,
    pub salary_range: String,
    pub location: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Job {
        Job {
            id: self.id,
            role_id: self.role_id,
            title: self.title.clone(),
            company: self.company.clone(),
            salary_range: self.salary_range.clone(),
            location: self.location.clone(),
            link: self.link.clone(),
            description: self.description.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RoleId",
        to = "super::roles::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
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
    pub fn fixture(id: Uuid, role_id: Uuid, title: &str) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            role_id,
            title: title.to_string(),
            company: "Polygon".to_string(),
            salary_range: "12-18 LPA".to_string(),
            location: Some("Remote".to_string()),
            link: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
