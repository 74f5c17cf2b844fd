use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::progress::application::domain::{CourseProgressList, SkillProgressList};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserProgressRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The progress lists stored on a user row.
///
/// Each save replaces one whole list in a single statement, so a concurrent
/// writer of the same list wins or loses as a unit.
#[async_trait]
pub trait UserProgressRepository: Send + Sync {
    async fn skill_progress(
        &self,
        user_id: UserId,
    ) -> Result<SkillProgressList, UserProgressRepositoryError>;

    async fn save_skill_progress(
        &self,
        user_id: UserId,
        progress: &SkillProgressList,
    ) -> Result<(), UserProgressRepositoryError>;

    async fn course_progress(
        &self,
        user_id: UserId,
    ) -> Result<CourseProgressList, UserProgressRepositoryError>;

    async fn save_course_progress(
        &self,
        user_id: UserId,
        progress: &CourseProgressList,
    ) -> Result<(), UserProgressRepositoryError>;

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, UserProgressRepositoryError>;
}
