use async_trait::async_trait;

use crate::feedback::application::domain::FeedbackWithAuthor;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListFeedbackError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListFeedbackUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FeedbackWithAuthor>, ListFeedbackError>;
}
