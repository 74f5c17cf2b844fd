use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::JobCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[serde(alias = "roleId")]
    pub role: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub salary_range: String,
    pub location: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl JobRequest {
    fn into_command(self) -> Result<JobCommand, HttpResponse> {
        JobCommand::new(
            self.role,
            self.title,
            self.company,
            self.salary_range,
            self.location,
            self.link,
            self.description,
        )
        .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/jobs",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All jobs, newest first"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/jobs")]
pub async fn list_admin_jobs_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.jobs.list().await {
        Ok(jobs) => ApiResponse::success(jobs),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/jobs",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = JobRequest,
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Validation error or unknown role", body = ErrorResponse),
    )
)]
#[post("/api/admin/jobs")]
pub async fn create_job_handler(
    admin: AdminUser,
    req: web::Json<JobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.jobs.create(command).await {
        Ok(job) => {
            info!(admin_id = %admin.user_id, job_id = %job.id, "Admin created job");
            ApiResponse::created(job)
        }
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/jobs/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Job id")),
    request_body = JobRequest,
    responses(
        (status = 200, description = "Job updated"),
        (status = 404, description = "Job not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/jobs/{id}")]
pub async fn update_job_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<JobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.jobs.update(path.into_inner(), command).await {
        Ok(job) => ApiResponse::success(job),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/jobs/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job deleted"),
        (status = 404, description = "Job not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/jobs/{id}")]
pub async fn delete_job_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.jobs.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted(),
        Err(e) => admin_error_response(e),
    }
}
