use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::feedback::application::domain::Feedback;
use crate::feedback::application::ports::{
    incoming::use_cases::{SubmitFeedbackCommand, SubmitFeedbackError, SubmitFeedbackUseCase},
    outgoing::{FeedbackRepository, FeedbackRepositoryError, NewFeedback},
};

pub struct SubmitFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitFeedbackUseCase for SubmitFeedbackService<R>
where
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: SubmitFeedbackCommand,
    ) -> Result<Feedback, SubmitFeedbackError> {
        let feedback = self
            .repository
            .create(NewFeedback {
                user: user_id,
                comment: command.comment().to_string(),
                rating: command.rating(),
            })
            .await
            .map_err(|e| match e {
                FeedbackRepositoryError::UnknownUser => SubmitFeedbackError::UserNotFound,
                FeedbackRepositoryError::DatabaseError(msg) => {
                    SubmitFeedbackError::RepositoryError(msg)
                }
            })?;

        info!(feedback_id = %feedback.id, user_id = %user_id, rating = feedback.rating.value(), "Feedback submitted");

        Ok(feedback)
    }
}
