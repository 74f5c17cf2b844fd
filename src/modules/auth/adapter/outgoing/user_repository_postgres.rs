use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::{UserAccount, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateDetailsData, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Applies `changes` to one row and returns the updated account.
    async fn update_one(
        &self,
        user_id: UserId,
        mut changes: ActiveModel,
    ) -> Result<UserAccount, UserRepositoryError> {
        changes.updated_at = Set(Utc::now().fixed_offset());

        let rows: Vec<Model> = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(|model| model.to_account())
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserAccount, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            avatar: Set(data.avatar),
            stream_id: Set(None),
            skill_progress: Set(serde_json::json!([])),
            course_progress: Set(serde_json::json!([])),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_account())
    }

    async fn update_details(
        &self,
        user_id: UserId,
        data: UpdateDetailsData,
    ) -> Result<UserAccount, UserRepositoryError> {
        let mut changes = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            changes.name = Set(name);
        }
        if let Some(avatar) = data.avatar {
            changes.avatar = Set(avatar);
        }

        self.update_one(user_id, changes).await
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<UserAccount, UserRepositoryError> {
        let changes = ActiveModel {
            password_hash: Set(new_password_hash),
            ..Default::default()
        };

        self.update_one(user_id, changes).await
    }

    async fn set_stream(
        &self,
        user_id: UserId,
        stream_id: Option<Uuid>,
    ) -> Result<UserAccount, UserRepositoryError> {
        let changes = ActiveModel {
            stream_id: Set(stream_id),
            ..Default::default()
        };

        self.update_one(user_id, changes).await
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => UserRepositoryError::UserAlreadyExists,
        Some(ConstraintViolation::ForeignKey) => UserRepositoryError::UnknownStream,
        None => UserRepositoryError::DatabaseError(e.to_string()),
    }
}
