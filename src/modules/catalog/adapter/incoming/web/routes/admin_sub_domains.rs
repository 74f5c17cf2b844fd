use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::domain::Certification;
use crate::catalog::application::ports::incoming::use_cases::{
    CertificationsCommand, SubDomainCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDto {
    #[serde(default)]
    pub name: String,
    pub issuer: Option<String>,
    pub level: Option<String>,
    pub exam_url: Option<String>,
    pub fee: Option<String>,
}

impl From<CertificationDto> for Certification {
    fn from(dto: CertificationDto) -> Self {
        Certification {
            name: dto.name,
            issuer: dto.issuer,
            level: dto.level,
            exam_url: dto.exam_url,
            fee: dto.fee,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubDomainRequest {
    #[serde(alias = "streamId")]
    pub stream: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub recommended_certifications: Vec<CertificationDto>,
}

impl SubDomainRequest {
    fn into_command(self) -> Result<SubDomainCommand, HttpResponse> {
        SubDomainCommand::new(
            self.stream,
            self.name,
            self.slug,
            self.description,
            self.recommended_certifications
                .into_iter()
                .map(Certification::from)
                .collect(),
        )
        .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

/// Replacement list; the bare array form is accepted too.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CertificationsRequest {
    Wrapped {
        #[serde(alias = "recommendedCertifications")]
        certifications: Vec<CertificationDto>,
    },
    List(Vec<CertificationDto>),
}

impl CertificationsRequest {
    fn into_command(self) -> Result<CertificationsCommand, HttpResponse> {
        let list = match self {
            CertificationsRequest::Wrapped { certifications } => certifications,
            CertificationsRequest::List(list) => list,
        };
        CertificationsCommand::new(list.into_iter().map(Certification::from).collect())
            .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/substreams",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All sub-domains with their stream"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/substreams")]
pub async fn list_admin_sub_domains_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.sub_domains.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/substreams",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = SubDomainRequest,
    responses(
        (status = 201, description = "Sub-domain created"),
        (status = 400, description = "Validation error or unknown stream", body = ErrorResponse),
        (status = 409, description = "Slug already used", body = ErrorResponse),
    )
)]
#[post("/api/admin/substreams")]
pub async fn create_sub_domain_handler(
    admin: AdminUser,
    req: web::Json<SubDomainRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.sub_domains.create(command).await {
        Ok(sub_domain) => {
            info!(admin_id = %admin.user_id, sub_domain_id = %sub_domain.id, "Admin created sub-domain");
            ApiResponse::created(sub_domain)
        }
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/substreams/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Sub-domain id")),
    request_body = SubDomainRequest,
    responses(
        (status = 200, description = "Sub-domain updated"),
        (status = 404, description = "Sub-domain not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/substreams/{id}")]
pub async fn update_sub_domain_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SubDomainRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.sub_domains.update(path.into_inner(), command).await {
        Ok(sub_domain) => ApiResponse::success(sub_domain),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/substreams/{id}/certifications",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Sub-domain id")),
    request_body = CertificationsRequest,
    responses(
        (status = 200, description = "Certifications replaced"),
        (status = 400, description = "Certification without a name", body = ErrorResponse),
        (status = 404, description = "Sub-domain not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/substreams/{id}/certifications")]
pub async fn replace_certifications_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<CertificationsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data
        .catalog
        .sub_domains
        .replace_certifications(path.into_inner(), command)
        .await
    {
        Ok(sub_domain) => ApiResponse::success(sub_domain),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/substreams/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Sub-domain id")),
    responses(
        (status = 200, description = "Sub-domain deleted"),
        (status = 409, description = "Sub-domain still has roles", body = ErrorResponse),
    )
)]
#[delete("/api/admin/substreams/{id}")]
pub async fn delete_sub_domain_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sub_domain_id = path.into_inner();

    match data.catalog.sub_domains.delete(sub_domain_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, sub_domain_id = %sub_domain_id, "Admin deleted sub-domain");
            ApiResponse::deleted()
        }
        Err(e) => admin_error_response(e),
    }
}
