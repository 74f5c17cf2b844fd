use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{UserAccount, UserId};
use crate::progress::application::domain::{CourseProgressList, SkillProgressList};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub avatar: String,
    pub stream_id: Option<Uuid>,
    /// Ordered `[{skill, level}]`
    #[sea_orm(column_type = "JsonBinary")]
    pub skill_progress: Json,
    /// Ordered `[{course, completionPercentage, isCompleted, startedAt, completedAt}]`
    #[sea_orm(column_type = "JsonBinary")]
    pub course_progress: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_account(&self) -> UserAccount {
        UserAccount {
            id: UserId::from(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            // the column is constrained to 'user' | 'admin'
            role: self.role.parse().unwrap_or_default(),
            avatar: self.avatar.clone(),
            stream_id: self.stream_id,
            created_at: self.created_at.into(),
        }
    }

    pub fn skill_progress(&self) -> Result<SkillProgressList, serde_json::Error> {
        serde_json::from_value(self.skill_progress.clone())
    }

    pub fn course_progress(&self) -> Result<CourseProgressList, serde_json::Error> {
        serde_json::from_value(self.course_progress.clone())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::catalog::adapter::outgoing::sea_orm_entity::streams::Entity",
        from = "Column::StreamId",
        to = "crate::catalog::adapter::outgoing::sea_orm_entity::streams::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Stream,
}

impl Related<crate::catalog::adapter::outgoing::sea_orm_entity::streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stream.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

#[cfg(test)]
impl Model {
    pub fn fixture(id: Uuid, email: &str) -> Self {
        let now = chrono::Utc::now().fixed_offset();
        Self {
            id,
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA".to_string(),
            role: "user".to_string(),
            avatar: crate::auth::application::domain::entities::DEFAULT_AVATAR.to_string(),
            stream_id: None,
            skill_progress: serde_json::json!([]),
            course_progress: serde_json::json!([]),
            created_at: now,
            updated_at: now,
        }
    }
}
