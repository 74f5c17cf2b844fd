use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::feedback::application::domain::{Feedback, FeedbackWithAuthor, Rating};

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub user: UserId,
    pub comment: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeedbackRepositoryError {
    #[error("User not found")]
    UnknownUser,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, data: NewFeedback) -> Result<Feedback, FeedbackRepositoryError>;

    /// Newest first.
    async fn list_with_authors(&self) -> Result<Vec<FeedbackWithAuthor>, FeedbackRepositoryError>;
}
