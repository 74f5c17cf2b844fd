use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::career::application::domain::{annotate_progress, merge_unique_courses, RoleDetails};
use crate::career::application::ports::{
    incoming::use_cases::{GetRoleDetailsError, GetRoleDetailsUseCase},
    outgoing::{CareerQuery, CareerQueryError},
};

#[derive(Debug, Clone)]
pub struct GetRoleDetailsService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetRoleDetailsService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl From<CareerQueryError> for GetRoleDetailsError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::DatabaseError(msg) => GetRoleDetailsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
impl<Q> GetRoleDetailsUseCase for GetRoleDetailsService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(
        &self,
        role_id: Uuid,
        user_id: UserId,
    ) -> Result<RoleDetails, GetRoleDetailsError> {
        let role = self
            .query
            .role(role_id)
            .await?
            .ok_or(GetRoleDetailsError::RoleNotFound)?;

        let sub_domain = self.query.sub_domain(role.sub_domain_id).await?;

        let linked = self.query.courses_linked_to_role(role_id).await?;
        let skill_matched = self.query.courses_with_skills(&role.skills).await?;
        let courses = merge_unique_courses(linked, skill_matched);

        let jobs = self.query.jobs_for_roles(&[role_id]).await?;

        let progress = self
            .query
            .course_progress(user_id)
            .await?
            .ok_or(GetRoleDetailsError::UserNotFound)?;

        debug!(
            role_id = %role_id,
            user_id = %user_id,
            courses = courses.len(),
            jobs = jobs.len(),
            "Role details assembled"
        );

        Ok(RoleDetails {
            courses: annotate_progress(courses, &progress),
            jobs,
            sub_domain,
            role,
        })
    }
}
