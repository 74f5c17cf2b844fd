use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserProfileQuery, UserProfileView};
use crate::progress::application::ports::{
    incoming::use_cases::{
        TrackCourseProgressCommand, TrackCourseProgressError, TrackCourseProgressUseCase,
    },
    outgoing::{UserProgressRepository, UserProgressRepositoryError},
};

pub struct TrackCourseProgressService<R, P>
where
    R: UserProgressRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    repository: R,
    profiles: P,
}

impl<R, P> TrackCourseProgressService<R, P>
where
    R: UserProgressRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    pub fn new(repository: R, profiles: P) -> Self {
        Self {
            repository,
            profiles,
        }
    }
}

impl From<UserProgressRepositoryError> for TrackCourseProgressError {
    fn from(err: UserProgressRepositoryError) -> Self {
        match err {
            UserProgressRepositoryError::UserNotFound => TrackCourseProgressError::UserNotFound,
            UserProgressRepositoryError::DatabaseError(msg) => {
                TrackCourseProgressError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
impl<R, P> TrackCourseProgressUseCase for TrackCourseProgressService<R, P>
where
    R: UserProgressRepository + Send + Sync,
    P: UserProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: TrackCourseProgressCommand,
    ) -> Result<UserProfileView, TrackCourseProgressError> {
        if !self.repository.course_exists(command.course_id()).await? {
            return Err(TrackCourseProgressError::CourseNotFound);
        }

        let mut progress = self.repository.course_progress(user_id).await?;
        progress.track(
            command.course_id(),
            command.completion_percentage(),
            command.is_completed(),
            Utc::now(),
        );
        self.repository
            .save_course_progress(user_id, &progress)
            .await?;

        debug!(
            user_id = %user_id,
            course_id = %command.course_id(),
            completion = command.completion_percentage().value(),
            "Course progress saved"
        );

        self.profiles
            .profile(user_id)
            .await
            .map_err(|e| TrackCourseProgressError::RepositoryError(e.to_string()))?
            .ok_or(TrackCourseProgressError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::application::services::fakes::FakeProgressStore;
    use uuid::Uuid;

    fn setup() -> (FakeProgressStore, UserId, Uuid) {
        let user = UserId::from(Uuid::new_v4());
        let course = Uuid::new_v4();
        let store = FakeProgressStore::default().with_user(user).with_course(course);
        (store, user, course)
    }

    fn command(course: Uuid, pct: f64, done: Option<bool>) -> TrackCourseProgressCommand {
        TrackCourseProgressCommand::new(course, pct, done).unwrap()
    }

    #[tokio::test]
    async fn first_call_starts_the_course() {
        let (store, user, course) = setup();
        let service = TrackCourseProgressService::new(store.clone(), store.clone());

        let profile = service.execute(user, command(course, 50.0, None)).await.unwrap();

        assert_eq!(profile.course_progress.len(), 1);
        assert_eq!(profile.course_progress[0].completion_percentage, 50.0);
        assert!(!profile.course_progress[0].is_completed);
        assert_eq!(profile.course_progress[0].completed_at, None);
    }

    #[tokio::test]
    async fn completing_later_updates_the_same_entry() {
        let (store, user, course) = setup();
        let service = TrackCourseProgressService::new(store.clone(), store.clone());

        service.execute(user, command(course, 40.0, Some(false))).await.unwrap();
        let started_at = store.courses_of(user).get(&course).unwrap().started_at;
        service.execute(user, command(course, 100.0, Some(true))).await.unwrap();

        let progress = store.courses_of(user);
        assert_eq!(progress.len(), 1);
        let entry = progress.get(&course).unwrap();
        assert_eq!(entry.completion_percentage.value(), 100.0);
        assert!(entry.is_completed);
        assert!(entry.completed_at.is_some());
        assert_eq!(entry.started_at, started_at);
    }

    #[tokio::test]
    async fn reopening_keeps_first_completion_time() {
        let (store, user, course) = setup();
        let service = TrackCourseProgressService::new(store.clone(), store.clone());

        service.execute(user, command(course, 100.0, Some(true))).await.unwrap();
        let completed_at = store.courses_of(user).get(&course).unwrap().completed_at;
        service.execute(user, command(course, 80.0, Some(false))).await.unwrap();

        let entry = store.courses_of(user).get(&course).cloned().unwrap();
        assert!(!entry.is_completed);
        assert_eq!(entry.completed_at, completed_at);
    }

    #[tokio::test]
    async fn unknown_course_is_rejected_before_any_write() {
        let (store, user, _) = setup();
        let service = TrackCourseProgressService::new(store.clone(), store.clone());

        let result = service.execute(user, command(Uuid::new_v4(), 10.0, None)).await;

        assert_eq!(result.unwrap_err(), TrackCourseProgressError::CourseNotFound);
        assert!(store.courses_of(user).is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (store, _, course) = setup();
        let service = TrackCourseProgressService::new(store.clone(), store);

        let result = service
            .execute(UserId::from(Uuid::new_v4()), command(course, 10.0, None))
            .await;

        assert_eq!(result.unwrap_err(), TrackCourseProgressError::UserNotFound);
    }
}
