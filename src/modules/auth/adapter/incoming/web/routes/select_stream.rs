use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::select_stream::SelectStreamError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

/// `stream: null` clears the selection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectStreamRequest {
    #[serde(alias = "streamId")]
    pub stream: Option<Uuid>,
}

/// Choose (or clear) the caller's stream
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = "user",
    security(("BearerAuth" = [])),
    request_body = SelectStreamRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown stream", body = ErrorResponse),
    )
)]
#[put("/api/user/profile")]
pub async fn select_stream_handler(
    user: AuthenticatedUser,
    req: web::Json<SelectStreamRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let stream = req.into_inner().stream;

    match data.auth.select_stream.execute(user.user_id, stream).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, stream_id = ?stream, "Stream selected");
            ApiResponse::success(profile)
        }
        Err(SelectStreamError::StreamNotFound) => {
            ApiResponse::not_found("STREAM_NOT_FOUND", "Stream not found")
        }
        Err(SelectStreamError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SelectStreamError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to select stream: {}", e);
            ApiResponse::internal_error()
        }
    }
}
