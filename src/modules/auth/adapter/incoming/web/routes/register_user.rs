use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::register_user::{RegisterUserCommand, RegisterUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Meera Nair")]
    pub name: String,
    #[schema(example = "meera@example.com")]
    pub email: String,
    #[schema(example = "secret1")]
    pub password: String,
}

/// Register a new account
///
/// Returns a bearer token and the created user. The role is decided server side.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created, returns `{token, user}`"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(dto.name, dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!("Registration rejected: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User registered");
            ApiResponse::created(session)
        }
        Err(RegisterUserError::UserAlreadyExists) => {
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
