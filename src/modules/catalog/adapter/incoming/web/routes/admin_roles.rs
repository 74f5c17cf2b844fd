use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::RoleCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[serde(alias = "subDomainId", alias = "subStream")]
    pub sub_domain: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl RoleRequest {
    fn into_command(self) -> Result<RoleCommand, HttpResponse> {
        RoleCommand::new(self.sub_domain, self.title, self.description, self.skills)
            .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/roles",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All roles with sub-domain and stream embedded"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/roles")]
pub async fn list_admin_roles_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.roles.list().await {
        Ok(roles) => ApiResponse::success(roles),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/roles",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = RoleRequest,
    responses(
        (status = 201, description = "Role created"),
        (status = 400, description = "Validation error or unknown sub-domain", body = ErrorResponse),
    )
)]
#[post("/api/admin/roles")]
pub async fn create_role_handler(
    admin: AdminUser,
    req: web::Json<RoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.roles.create(command).await {
        Ok(role) => {
            info!(admin_id = %admin.user_id, role_id = %role.id, "Admin created role");
            ApiResponse::created(role)
        }
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/roles/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Role id")),
    request_body = RoleRequest,
    responses(
        (status = 200, description = "Role updated"),
        (status = 404, description = "Role not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/roles/{id}")]
pub async fn update_role_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<RoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.roles.update(path.into_inner(), command).await {
        Ok(role) => ApiResponse::success(role),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/roles/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role deleted"),
        (status = 409, description = "Role still has jobs", body = ErrorResponse),
    )
)]
#[delete("/api/admin/roles/{id}")]
pub async fn delete_role_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let role_id = path.into_inner();

    match data.catalog.roles.delete(role_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, role_id = %role_id, "Admin deleted role");
            ApiResponse::deleted()
        }
        Err(e) => admin_error_response(e),
    }
}
