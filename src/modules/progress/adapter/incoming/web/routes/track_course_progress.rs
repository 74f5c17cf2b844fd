use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::progress::application::ports::incoming::use_cases::{
    TrackCourseProgressCommand, TrackCourseProgressError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgressRequest {
    pub course_id: Uuid,
    /// 0 to 100, inclusive
    pub completion_percentage: f64,
    pub is_completed: Option<bool>,
}

/// Record the caller's progress on a course
#[utoipa::path(
    post,
    path = "/api/user/course-progress",
    tag = "progress",
    security(("BearerAuth" = [])),
    request_body = CourseProgressRequest,
    responses(
        (status = 200, description = "Updated profile with resolved course progress"),
        (status = 400, description = "Percentage out of range or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Course or user not found", body = ErrorResponse),
    )
)]
#[post("/api/user/course-progress")]
pub async fn track_course_progress_handler(
    user: AuthenticatedUser,
    req: web::Json<CourseProgressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match TrackCourseProgressCommand::new(
        req.course_id,
        req.completion_percentage,
        req.is_completed,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.progress.course_progress.execute(user.user_id, command).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, course_id = %req.course_id, "Course progress tracked");
            ApiResponse::success(profile)
        }
        Err(TrackCourseProgressError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(TrackCourseProgressError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(TrackCourseProgressError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, course_id = %req.course_id, "Failed to track course progress: {}", e);
            ApiResponse::internal_error()
        }
    }
}
