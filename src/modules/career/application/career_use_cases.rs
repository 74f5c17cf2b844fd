use std::sync::Arc;

use crate::career::application::ports::incoming::use_cases::{
    GetRoleDetailsUseCase, GetSubStreamCoursesUseCase,
};

#[derive(Clone)]
pub struct CareerUseCases {
    pub role_details: Arc<dyn GetRoleDetailsUseCase + Send + Sync>,
    pub sub_stream_courses: Arc<dyn GetSubStreamCoursesUseCase + Send + Sync>,
}
