use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// All feedback, newest first, with author name and email
#[utoipa::path(
    get,
    path = "/api/admin/feedback",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Feedback list"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/feedback")]
pub async fn list_feedback_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.feedback.list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => {
            error!(admin_id = %admin.user_id, "Failed to list feedback: {}", e);
            ApiResponse::internal_error()
        }
    }
}
