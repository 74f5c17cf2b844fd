use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::career::application::ports::incoming::use_cases::{
    GetSubStreamCoursesError, GetSubStreamCoursesQuery,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Courses, roles and jobs of one sub-stream, addressed by slugs.
#[utoipa::path(
    get,
    path = "/api/user/streams/{stream_slug}/substreams/{sub_stream_slug}/courses",
    tag = "career",
    security(("BearerAuth" = [])),
    params(
        ("stream_slug" = String, Path, description = "Stream slug, e.g. `cse`"),
        ("sub_stream_slug" = String, Path, description = "Sub-stream slug, e.g. `cse-cyber-security`"),
    ),
    responses(
        (status = 200, description = "Sub-stream with roles, courses and jobs"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Stream, sub-stream or user not found", body = ErrorResponse),
    )
)]
#[get("/api/user/streams/{stream_slug}/substreams/{sub_stream_slug}/courses")]
pub async fn get_sub_stream_courses_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (stream_slug, sub_stream_slug) = path.into_inner();
    let query = GetSubStreamCoursesQuery::new(&stream_slug, &sub_stream_slug);

    match data.career.sub_stream_courses.execute(query, user.user_id).await {
        Ok(result) => ApiResponse::success(result),
        Err(GetSubStreamCoursesError::StreamNotFound) => {
            ApiResponse::not_found("STREAM_NOT_FOUND", "Stream not found")
        }
        Err(GetSubStreamCoursesError::SubStreamNotFound) => {
            ApiResponse::not_found("SUB_STREAM_NOT_FOUND", "Sub-stream not found")
        }
        Err(GetSubStreamCoursesError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetSubStreamCoursesError::QueryFailed(e)) => {
            error!(
                stream = %stream_slug,
                sub_stream = %sub_stream_slug,
                "Failed to load sub-stream courses: {}", e
            );
            ApiResponse::internal_error()
        }
    }
}
