use serde::Serialize;
use utoipa::ToSchema;

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Rating must be between 1 and 5")]
    pub message: String,
}
