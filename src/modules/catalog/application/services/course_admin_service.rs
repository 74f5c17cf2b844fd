use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::Course;
use crate::catalog::application::ports::{
    incoming::use_cases::{CatalogAdminError, CourseAdminUseCase, CourseCommand},
    outgoing::CourseRepository,
};

const KIND: &str = "Course";

#[derive(Debug, Clone)]
pub struct CourseAdminService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> CourseAdminService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CourseAdminUseCase for CourseAdminService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn list(&self) -> Result<Vec<Course>, CatalogAdminError> {
        self.repository
            .list()
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn create(&self, command: CourseCommand) -> Result<Course, CatalogAdminError> {
        let course = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(course_id = %course.id, skill = %course.skill, "Course created");
        Ok(course)
    }

    async fn update(&self, id: Uuid, command: CourseCommand) -> Result<Course, CatalogAdminError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogAdminError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| CatalogAdminError::from_repository(KIND, e))?;

        info!(course_id = %id, "Course deleted");
        Ok(())
    }
}
