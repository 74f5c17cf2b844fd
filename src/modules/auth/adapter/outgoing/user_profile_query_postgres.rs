use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CourseProgressView, UserProfileQuery, UserProfileView, UserQueryError,
};
use crate::catalog::adapter::outgoing::sea_orm_entity::{courses, streams};
use crate::catalog::application::domain::CourseSummary;

/// Builds the profile view: user row, chosen stream and the courses
/// referenced from the user's course progress.
#[derive(Clone, Debug)]
pub struct UserProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn course_summaries(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, CourseSummary>, UserQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = courses::Entity::find()
            .filter(courses::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .iter()
            .map(|model| {
                model
                    .to_summary()
                    .map(|summary| (summary.id, summary))
                    .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl UserProfileQuery for UserProfileQueryPostgres {
    async fn profile(&self, user_id: UserId) -> Result<Option<UserProfileView>, UserQueryError> {
        let Some(user) = users::Entity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let skill_progress = user.skill_progress().map_err(map_json_err)?;
        let course_progress = user.course_progress().map_err(map_json_err)?;

        let stream = match user.stream_id {
            Some(stream_id) => streams::Entity::find_by_id(stream_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|model| model.to_domain()),
            None => None,
        };

        let summaries = self
            .course_summaries(course_progress.course_ids().collect())
            .await?;

        let course_progress = course_progress
            .entries()
            .iter()
            .map(|entry| CourseProgressView::resolve(entry, summaries.get(&entry.course).cloned()))
            .collect();

        let account = user.to_account();

        Ok(Some(UserProfileView {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
            avatar: account.avatar,
            stream,
            skill_progress: skill_progress.into(),
            course_progress,
            created_at: account.created_at,
        }))
    }
}

fn map_db_err(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> UserQueryError {
    UserQueryError::DatabaseError(format!("Corrupt progress column: {e}"))
}
