use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::catalog::application::domain::{CourseSummary, Stream};
use crate::progress::application::domain::{CourseProgress, SkillProgress};

use super::user_query::UserQueryError;

/// A course progress entry whose course reference has been resolved.
/// `course` is `None` once the course has been removed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgressView {
    pub course: Option<CourseSummary>,
    pub completion_percentage: f64,
    pub is_completed: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl CourseProgressView {
    pub fn resolve(entry: &CourseProgress, course: Option<CourseSummary>) -> Self {
        Self {
            course,
            completion_percentage: entry.completion_percentage.value(),
            is_completed: entry.is_completed,
            started_at: entry.started_at,
            completed_at: entry.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    pub stream: Option<Stream>,
    pub skill_progress: Vec<SkillProgress>,
    pub course_progress: Vec<CourseProgressView>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    async fn profile(&self, user_id: UserId) -> Result<Option<UserProfileView>, UserQueryError>;
}
