use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::catalog::adapter::outgoing::sea_orm_entity::courses;
use crate::progress::application::domain::{CourseProgressList, SkillProgressList};
use crate::progress::application::ports::outgoing::{
    UserProgressRepository, UserProgressRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserProgressRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserProgressRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_user(&self, user_id: UserId) -> Result<Model, UserProgressRepositoryError> {
        Entity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserProgressRepositoryError::UserNotFound)
    }

    /// Writes one progress column in a single UPDATE.
    async fn update_one(
        &self,
        user_id: UserId,
        mut changes: ActiveModel,
    ) -> Result<(), UserProgressRepositoryError> {
        changes.updated_at = Set(Utc::now().fixed_offset());

        let result = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserProgressRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> UserProgressRepositoryError {
    UserProgressRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> UserProgressRepositoryError {
    UserProgressRepositoryError::DatabaseError(format!("Invalid progress column: {e}"))
}

#[async_trait]
impl UserProgressRepository for UserProgressRepositoryPostgres {
    async fn skill_progress(
        &self,
        user_id: UserId,
    ) -> Result<SkillProgressList, UserProgressRepositoryError> {
        self.find_user(user_id)
            .await?
            .skill_progress()
            .map_err(map_json_err)
    }

    async fn save_skill_progress(
        &self,
        user_id: UserId,
        progress: &SkillProgressList,
    ) -> Result<(), UserProgressRepositoryError> {
        let value = serde_json::to_value(progress).map_err(map_json_err)?;

        let changes = ActiveModel {
            skill_progress: Set(value),
            ..Default::default()
        };
        self.update_one(user_id, changes).await
    }

    async fn course_progress(
        &self,
        user_id: UserId,
    ) -> Result<CourseProgressList, UserProgressRepositoryError> {
        self.find_user(user_id)
            .await?
            .course_progress()
            .map_err(map_json_err)
    }

    async fn save_course_progress(
        &self,
        user_id: UserId,
        progress: &CourseProgressList,
    ) -> Result<(), UserProgressRepositoryError> {
        let value = serde_json::to_value(progress).map_err(map_json_err)?;

        let changes = ActiveModel {
            course_progress: Set(value),
            ..Default::default()
        };
        self.update_one(user_id, changes).await
    }

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, UserProgressRepositoryError> {
        let course = courses::Entity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(course.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::application::domain::{CompletionPercentage, SkillLevel};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn repo(db: MockDatabase) -> UserProgressRepositoryPostgres {
        UserProgressRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn stored_skills_are_decoded_in_order() {
        let user_id = Uuid::new_v4();
        let mut user = Model::fixture(user_id, "meera@example.com");
        user.skill_progress = json!([
            { "skill": "Python", "level": "Advanced" },
            { "skill": "SQL", "level": "Beginner" }
        ]);
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![user]]);

        let skills = repo(db).skill_progress(UserId::from(user_id)).await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills.entries()[0].skill, "Python");
        assert_eq!(skills.get("SQL").unwrap().level, SkillLevel::Beginner);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()]);

        let result = repo(db).course_progress(UserId::from(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), UserProgressRepositoryError::UserNotFound);
    }

    #[tokio::test]
    async fn corrupt_column_is_a_database_error() {
        let user_id = Uuid::new_v4();
        let mut user = Model::fixture(user_id, "meera@example.com");
        user.course_progress = json!({ "not": "a list" });
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![user]]);

        let result = repo(db).course_progress(UserId::from(user_id)).await;

        assert!(matches!(result, Err(UserProgressRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn saving_progress_updates_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ]);
        let mut progress = CourseProgressList::new();
        progress.track(
            Uuid::new_v4(),
            CompletionPercentage::new(50.0).unwrap(),
            false,
            Utc::now(),
        );

        let result = repo(db)
            .save_course_progress(UserId::from(Uuid::new_v4()), &progress)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn saving_for_a_deleted_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);

        let result = repo(db)
            .save_skill_progress(UserId::from(Uuid::new_v4()), &SkillProgressList::new())
            .await;

        assert_eq!(result.unwrap_err(), UserProgressRepositoryError::UserNotFound);
    }

    #[tokio::test]
    async fn course_lookup() {
        let course_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![courses::Model::fixture(course_id, "Rust", "Rust")]])
            .append_query_results(vec![Vec::<courses::Model>::new()]);
        let repo = repo(db);

        assert!(repo.course_exists(course_id).await.unwrap());
        assert!(!repo.course_exists(Uuid::new_v4()).await.unwrap());
    }
}
