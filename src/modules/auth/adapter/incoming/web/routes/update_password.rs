use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::update_password::{
    UpdatePasswordCommand, UpdatePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[schema(example = "secret1")]
    pub current_password: String,
    #[schema(example = "secret2")]
    pub new_password: String,
}

/// Change the caller's password
///
/// Issues a fresh token on success.
#[utoipa::path(
    put,
    path = "/api/auth/updatepassword",
    tag = "auth",
    security(("BearerAuth" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed, returns `{token, user}`"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[put("/api/auth/updatepassword")]
pub async fn update_password_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdatePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command =
        match UpdatePasswordCommand::new(user.user_id, dto.current_password, dto.new_password) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.auth.update_password.execute(command).await {
        Ok(session) => {
            info!(user_id = %user.user_id, "Password updated");
            ApiResponse::success(session)
        }
        Err(UpdatePasswordError::IncorrectPassword) => {
            warn!(user_id = %user.user_id, "Password change with wrong current password");
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Password is incorrect")
        }
        Err(UpdatePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, "Password update failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
