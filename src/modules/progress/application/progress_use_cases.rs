use std::sync::Arc;

use crate::progress::application::ports::incoming::use_cases::{
    TrackCourseProgressUseCase, UpdateSkillProgressUseCase,
};

#[derive(Clone)]
pub struct ProgressUseCases {
    pub skill_progress: Arc<dyn UpdateSkillProgressUseCase + Send + Sync>,
    pub course_progress: Arc<dyn TrackCourseProgressUseCase + Send + Sync>,
}
