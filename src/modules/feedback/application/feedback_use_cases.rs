use std::sync::Arc;

use crate::feedback::application::ports::incoming::use_cases::{
    ListFeedbackUseCase, SubmitFeedbackUseCase,
};

#[derive(Clone)]
pub struct FeedbackUseCases {
    pub submit: Arc<dyn SubmitFeedbackUseCase + Send + Sync>,
    pub list: Arc<dyn ListFeedbackUseCase + Send + Sync>,
}
