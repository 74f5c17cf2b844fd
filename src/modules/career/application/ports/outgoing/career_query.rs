use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::{Course, Job, Role, Stream, SubDomain};
use crate::progress::application::domain::CourseProgressList;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CareerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Independent reads the aggregation is assembled from. No two calls share a transaction.
#[async_trait]
pub trait CareerQuery: Send + Sync {
    async fn role(&self, role_id: Uuid) -> Result<Option<Role>, CareerQueryError>;

    async fn sub_domain(&self, sub_domain_id: Uuid) -> Result<Option<SubDomain>, CareerQueryError>;

    /// Courses whose `role` reference is `role_id`.
    async fn courses_linked_to_role(&self, role_id: Uuid) -> Result<Vec<Course>, CareerQueryError>;

    /// Courses whose `skill` is one of `skills`.
    async fn courses_with_skills(&self, skills: &[String]) -> Result<Vec<Course>, CareerQueryError>;

    /// Newest first.
    async fn jobs_for_roles(&self, role_ids: &[Uuid]) -> Result<Vec<Job>, CareerQueryError>;

    async fn stream_by_slug(&self, slug: &str) -> Result<Option<Stream>, CareerQueryError>;

    async fn sub_domain_by_slug(
        &self,
        stream_id: Uuid,
        slug: &str,
    ) -> Result<Option<SubDomain>, CareerQueryError>;

    async fn roles_in_sub_domain(&self, sub_domain_id: Uuid) -> Result<Vec<Role>, CareerQueryError>;

    /// Courses referencing the sub-domain or any of `role_ids`, newest first.
    async fn courses_for_sub_domain(
        &self,
        sub_domain_id: Uuid,
        role_ids: &[Uuid],
    ) -> Result<Vec<Course>, CareerQueryError>;

    /// `None` when the user does not exist.
    async fn course_progress(
        &self,
        user_id: UserId,
    ) -> Result<Option<CourseProgressList>, CareerQueryError>;
}
