use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::career::application::domain::SubStreamCourses;

/// Path slugs, compared after trimming and lower-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSubStreamCoursesQuery {
    stream_slug: String,
    sub_stream_slug: String,
}

impl GetSubStreamCoursesQuery {
    pub fn new(stream_slug: &str, sub_stream_slug: &str) -> Self {
        Self {
            stream_slug: stream_slug.trim().to_lowercase(),
            sub_stream_slug: sub_stream_slug.trim().to_lowercase(),
        }
    }

    pub fn stream_slug(&self) -> &str {
        &self.stream_slug
    }

    pub fn sub_stream_slug(&self) -> &str {
        &self.sub_stream_slug
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSubStreamCoursesError {
    #[error("Stream not found")]
    StreamNotFound,

    #[error("Sub-stream not found")]
    SubStreamNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSubStreamCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        query: GetSubStreamCoursesQuery,
        user_id: UserId,
    ) -> Result<SubStreamCourses, GetSubStreamCoursesError>;
}
