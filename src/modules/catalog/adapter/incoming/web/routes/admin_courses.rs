use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::domain::{CourseLevel, CourseType};
use crate::catalog::application::ports::incoming::use_cases::{
    CourseCommand, CourseInput, LinkInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseLinkDto {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    pub provider: Option<String>,
    /// `Free` | `Paid`
    #[serde(rename = "type", default)]
    #[schema(value_type = String)]
    pub course_type: CourseType,
    pub amount: Option<f64>,
}

impl From<CourseLinkDto> for LinkInput {
    fn from(dto: CourseLinkDto) -> Self {
        LinkInput {
            label: dto.label,
            url: dto.url,
            provider: dto.provider,
            course_type: dto.course_type,
            amount: dto.amount,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skill: String,
    #[serde(alias = "streamId")]
    pub stream: Option<Uuid>,
    #[serde(alias = "subDomainId", alias = "subStream")]
    pub sub_domain: Option<Uuid>,
    #[serde(alias = "roleId")]
    pub role: Option<Uuid>,
    /// `Free` | `Paid`
    #[serde(rename = "type", default)]
    #[schema(value_type = String)]
    pub course_type: CourseType,
    pub amount: Option<f64>,
    #[serde(default)]
    pub provider: String,
    pub duration: Option<String>,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
    #[serde(default)]
    pub resource_links: Vec<CourseLinkDto>,
    #[serde(default)]
    pub certificate_links: Vec<CourseLinkDto>,
    #[serde(default)]
    pub target_companies: Vec<String>,
    /// `Beginner` | `Intermediate` | `Advanced`
    #[schema(value_type = Option<String>)]
    pub level: Option<CourseLevel>,
    pub is_featured: Option<bool>,
}

impl CourseRequest {
    fn into_command(self) -> Result<CourseCommand, HttpResponse> {
        let input = CourseInput {
            title: self.title,
            skill: self.skill,
            stream_id: self.stream,
            sub_domain_id: self.sub_domain,
            role_id: self.role,
            course_type: self.course_type,
            amount: self.amount,
            provider: self.provider,
            duration: self.duration,
            link: self.link,
            description: self.description,
            resource_links: self.resource_links.into_iter().map(LinkInput::from).collect(),
            certificate_links: self
                .certificate_links
                .into_iter()
                .map(LinkInput::from)
                .collect(),
            target_companies: self.target_companies,
            level: self.level,
            is_featured: self.is_featured,
        };

        CourseCommand::new(input)
            .map_err(|e| ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/courses",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All courses, newest first"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/courses")]
pub async fn list_admin_courses_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.courses.list().await {
        Ok(courses) => ApiResponse::success(courses),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/courses",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created"),
        (status = 400, description = "Validation error or unknown reference", body = ErrorResponse),
    )
)]
#[post("/api/admin/courses")]
pub async fn create_course_handler(
    admin: AdminUser,
    req: web::Json<CourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.courses.create(command).await {
        Ok(course) => {
            info!(admin_id = %admin.user_id, course_id = %course.id, "Admin created course");
            ApiResponse::created(course)
        }
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated"),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/courses/{id}")]
pub async fn update_course_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<CourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.catalog.courses.update(path.into_inner(), command).await {
        Ok(course) => ApiResponse::success(course),
        Err(e) => admin_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/courses/{id}")]
pub async fn delete_course_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.catalog.courses.delete(course_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, course_id = %course_id, "Admin deleted course");
            ApiResponse::deleted()
        }
        Err(e) => admin_error_response(e),
    }
}
