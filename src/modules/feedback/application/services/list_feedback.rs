use async_trait::async_trait;

use crate::feedback::application::domain::FeedbackWithAuthor;
use crate::feedback::application::ports::{
    incoming::use_cases::{ListFeedbackError, ListFeedbackUseCase},
    outgoing::FeedbackRepository,
};

pub struct ListFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListFeedbackUseCase for ListFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<FeedbackWithAuthor>, ListFeedbackError> {
        self.repository
            .list_with_authors()
            .await
            .map_err(|e| ListFeedbackError::RepositoryError(e.to_string()))
    }
}
