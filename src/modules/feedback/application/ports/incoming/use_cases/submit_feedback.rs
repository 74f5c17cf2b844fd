use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::feedback::application::domain::{Feedback, Rating, RatingOutOfRange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFeedbackCommandError {
    #[error("Comment is required")]
    EmptyComment,

    #[error(transparent)]
    InvalidRating(#[from] RatingOutOfRange),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFeedbackCommand {
    comment: String,
    rating: Rating,
}

impl SubmitFeedbackCommand {
    pub fn new(comment: &str, rating: i64) -> Result<Self, SubmitFeedbackCommandError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(SubmitFeedbackCommandError::EmptyComment);
        }

        Ok(Self {
            comment: comment.to_string(),
            rating: Rating::new(rating)?,
        })
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitFeedbackError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: SubmitFeedbackCommand,
    ) -> Result<Feedback, SubmitFeedbackError>;
}
