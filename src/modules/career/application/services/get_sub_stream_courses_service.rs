use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::career::application::domain::{annotate_progress, SubStreamCourses};
use crate::career::application::ports::{
    incoming::use_cases::{
        GetSubStreamCoursesError, GetSubStreamCoursesQuery, GetSubStreamCoursesUseCase,
    },
    outgoing::{CareerQuery, CareerQueryError},
};

#[derive(Debug, Clone)]
pub struct GetSubStreamCoursesService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubStreamCoursesService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl From<CareerQueryError> for GetSubStreamCoursesError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::DatabaseError(msg) => GetSubStreamCoursesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
impl<Q> GetSubStreamCoursesUseCase for GetSubStreamCoursesService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(
        &self,
        query: GetSubStreamCoursesQuery,
        user_id: UserId,
    ) -> Result<SubStreamCourses, GetSubStreamCoursesError> {
        let stream = self
            .query
            .stream_by_slug(query.stream_slug())
            .await?
            .ok_or(GetSubStreamCoursesError::StreamNotFound)?;

        let sub_stream = self
            .query
            .sub_domain_by_slug(stream.id, query.sub_stream_slug())
            .await?
            .ok_or(GetSubStreamCoursesError::SubStreamNotFound)?;

        let roles = self.query.roles_in_sub_domain(sub_stream.id).await?;
        let role_ids: Vec<Uuid> = roles.iter().map(|r| r.id).collect();

        let courses = self
            .query
            .courses_for_sub_domain(sub_stream.id, &role_ids)
            .await?;
        let jobs = self.query.jobs_for_roles(&role_ids).await?;

        let progress = self
            .query
            .course_progress(user_id)
            .await?
            .ok_or(GetSubStreamCoursesError::UserNotFound)?;

        debug!(
            sub_stream = %sub_stream.slug,
            roles = roles.len(),
            courses = courses.len(),
            "Sub-stream courses assembled"
        );

        Ok(SubStreamCourses {
            courses: annotate_progress(courses, &progress),
            stream,
            sub_stream,
            roles,
            jobs,
        })
    }
}
