use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between 1 and 5")]
pub struct RatingOutOfRange;

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, RatingOutOfRange> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(RatingOutOfRange)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub user: UserId,
    pub comment: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackAuthor {
    pub name: String,
    pub email: String,
}

/// Admin view: the feedback with its author's name and email in place of the bare id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithAuthor {
    pub id: Uuid,
    pub user: Option<FeedbackAuthor>,
    pub comment: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

impl FeedbackWithAuthor {
    pub fn new(feedback: Feedback, author: Option<FeedbackAuthor>) -> Self {
        Self {
            id: feedback.id,
            user: author,
            comment: feedback.comment,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}
