use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::update_details::{
    UpdateDetailsCommand, UpdateDetailsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDetailsRequest {
    #[schema(example = "Meera N.")]
    pub name: Option<String>,
    #[schema(example = "https://api.dicebear.com/7.x/avataaars/svg?seed=Meera")]
    pub avatar: Option<String>,
}

/// Update name and/or avatar of the caller
#[utoipa::path(
    put,
    path = "/api/auth/updatedetails",
    tag = "auth",
    security(("BearerAuth" = [])),
    request_body = UpdateDetailsRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[put("/api/auth/updatedetails")]
pub async fn update_details_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateDetailsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match UpdateDetailsCommand::new(user.user_id, dto.name, dto.avatar) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.update_details.execute(command).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile details updated");
            ApiResponse::success(profile)
        }
        Err(UpdateDetailsError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateDetailsError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to update details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
