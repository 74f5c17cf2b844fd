use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Roles inside a sub-domain
#[utoipa::path(
    get,
    path = "/api/user/roles/{sub_domain_id}",
    tag = "catalog",
    security(("BearerAuth" = [])),
    params(("sub_domain_id" = Uuid, Path, description = "Sub-domain id")),
    responses(
        (status = 200, description = "Roles with their sub-domain embedded"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/user/roles/{sub_domain_id}")]
pub async fn list_roles_by_sub_domain_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sub_domain_id = path.into_inner();

    match data.catalog.browse.roles_by_sub_domain(sub_domain_id).await {
        Ok(roles) => ApiResponse::success(roles),
        Err(e) => {
            error!(sub_domain_id = %sub_domain_id, "Failed to list roles: {}", e);
            ApiResponse::internal_error()
        }
    }
}
