use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::career::application::ports::incoming::use_cases::GetRoleDetailsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// A role with every course that teaches it and the openings for it.
///
/// Courses linked to the role come first, then courses matching one of the
/// role's skills. Each course carries the caller's progress or `null`.
#[utoipa::path(
    get,
    path = "/api/user/role-details/{role_id}",
    tag = "career",
    security(("BearerAuth" = [])),
    params(("role_id" = Uuid, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role with courses and jobs"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Role or user not found", body = ErrorResponse),
    )
)]
#[get("/api/user/role-details/{role_id}")]
pub async fn get_role_details_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let role_id = path.into_inner();

    match data.career.role_details.execute(role_id, user.user_id).await {
        Ok(details) => ApiResponse::success(details),
        Err(GetRoleDetailsError::RoleNotFound) => {
            ApiResponse::not_found("ROLE_NOT_FOUND", "Role not found")
        }
        Err(GetRoleDetailsError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetRoleDetailsError::QueryFailed(e)) => {
            error!(role_id = %role_id, user_id = %user.user_id, "Failed to load role details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
