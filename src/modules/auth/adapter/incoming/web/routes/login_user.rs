use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::header, post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "meera@example.com")]
    pub email: String,
    #[schema(example = "secret1")]
    pub password: String,
}

/// User login
///
/// Every attempt is recorded in the login log, including failures.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful, returns `{token, user}`"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    http_req: HttpRequest,
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let ip_address = http_req
        .connection_info()
        .realip_remote_addr()
        .map(str::to_string);
    let user_agent = http_req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let command = match LoginCommand::new(dto.email, dto.password, ip_address, user_agent) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %command.email(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in successfully");
            ApiResponse::success(session)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
