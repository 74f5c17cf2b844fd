use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::progress::application::domain::SkillLevel;
use crate::progress::application::ports::incoming::use_cases::{
    UpdateSkillProgressCommand, UpdateSkillProgressError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillProgressRequest {
    #[serde(default)]
    pub skill: String,
    /// One of `Beginner`, `Intermediate`, `Advanced`
    #[serde(default)]
    pub level: String,
}

/// Set the caller's level for a skill
#[utoipa::path(
    post,
    path = "/api/user/skill-progress",
    tag = "progress",
    security(("BearerAuth" = [])),
    request_body = SkillProgressRequest,
    responses(
        (status = 200, description = "The caller's full skill list"),
        (status = 400, description = "Blank skill or unknown level", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/user/skill-progress")]
pub async fn update_skill_progress_handler(
    user: AuthenticatedUser,
    req: web::Json<SkillProgressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let level = match req.level.parse::<SkillLevel>() {
        Ok(level) => level,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let command = match UpdateSkillProgressCommand::new(&req.skill, level) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.progress.skill_progress.execute(user.user_id, command).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(UpdateSkillProgressError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateSkillProgressError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to save skill progress: {}", e);
            ApiResponse::internal_error()
        }
    }
}
