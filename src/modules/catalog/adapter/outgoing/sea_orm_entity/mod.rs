pub mod courses;
pub mod jobs;
pub mod roles;
pub mod streams;
pub mod sub_domains;

/// A stored row that no longer fits the domain model.
#[derive(Debug, thiserror::Error)]
pub enum RowDecodeError {
    #[error("Invalid JSON column: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid column value: {0}")]
    Value(String),
}
