use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::StreamCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StreamRequest {
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl StreamRequest {
    fn into_command(self) -> Result<StreamCommand, actix_web::HttpResponse> {
        StreamCommand::new(self.name, self.slug, self.description)
            .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/streams",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All streams"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/streams")]
pub async fn list_admin_streams_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.streams.list().await {
        Ok(streams) => ApiResponse::success(streams),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/streams",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = StreamRequest,
    responses(
        (status = 201, description = "Stream created"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Name or slug already used", body = ErrorResponse),
    )
)]
#[post("/api/admin/streams")]
pub async fn create_stream_handler(
    admin: AdminUser,
    req: web::Json<StreamRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.streams.create(command).await {
        Ok(stream) => {
            info!(admin_id = %admin.user_id, stream_id = %stream.id, "Admin created stream");
            ApiResponse::created(stream)
        }
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/streams/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Stream id")),
    request_body = StreamRequest,
    responses(
        (status = 200, description = "Stream updated"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/streams/{id}")]
pub async fn update_stream_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<StreamRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.streams.update(path.into_inner(), command).await {
        Ok(stream) => ApiResponse::success(stream),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/streams/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Stream id")),
    responses(
        (status = 200, description = "Stream deleted"),
        (status = 404, description = "Stream not found", body = ErrorResponse),
        (status = 409, description = "Stream still has sub-domains", body = ErrorResponse),
    )
)]
#[delete("/api/admin/streams/{id}")]
pub async fn delete_stream_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let stream_id = path.into_inner();

    match data.catalog.streams.delete(stream_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, stream_id = %stream_id, "Admin deleted stream");
            ApiResponse::deleted()
        }
        Err(e) => admin_error_response(e),
    }
}
