use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserProfileView;
use crate::progress::application::domain::{CompletionPercentage, InvalidCompletionPercentage};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackCourseProgressCommand {
    course_id: Uuid,
    completion_percentage: CompletionPercentage,
    is_completed: bool,
}

impl TrackCourseProgressCommand {
    /// `is_completed` defaults to `false` when the caller leaves it out.
    pub fn new(
        course_id: Uuid,
        completion_percentage: f64,
        is_completed: Option<bool>,
    ) -> Result<Self, InvalidCompletionPercentage> {
        Ok(Self {
            course_id,
            completion_percentage: CompletionPercentage::new(completion_percentage)?,
            is_completed: is_completed.unwrap_or(false),
        })
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn completion_percentage(&self) -> CompletionPercentage {
        self.completion_percentage
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackCourseProgressError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Records the caller's progress on one course and returns the refreshed profile.
#[async_trait]
pub trait TrackCourseProgressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: TrackCourseProgressCommand,
    ) -> Result<UserProfileView, TrackCourseProgressError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_defaults_to_false() {
        let cmd = TrackCourseProgressCommand::new(Uuid::new_v4(), 25.0, None).unwrap();

        assert!(!cmd.is_completed());
        assert_eq!(cmd.completion_percentage().value(), 25.0);
    }

    #[test]
    fn percentage_outside_bounds_is_rejected() {
        assert!(TrackCourseProgressCommand::new(Uuid::new_v4(), 100.5, Some(true)).is_err());
        assert!(TrackCourseProgressCommand::new(Uuid::new_v4(), -1.0, None).is_err());
        assert!(TrackCourseProgressCommand::new(Uuid::new_v4(), f64::NAN, None).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(TrackCourseProgressCommand::new(Uuid::new_v4(), 0.0, None).is_ok());
        assert!(TrackCourseProgressCommand::new(Uuid::new_v4(), 100.0, Some(true)).is_ok());
    }
}
