use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identified by a valid bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
    else {
        tracing::error!("Token provider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let Some(token) = extract_token_from_header(req) else {
        return Err(create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Not authorized, no token",
        )));
    };

    match token_provider.verify_token(token) {
        Ok(claims) => Ok(AuthenticatedUser {
            user_id: UserId::from(claims.sub),
            role: claims.role,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Not authorized, token failed",
            )))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Caller whose token carries the `admin` role claim.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| {
            if user.role.is_admin() {
                Ok(AdminUser {
                    user_id: user.user_id,
                })
            } else {
                tracing::warn!(user_id = %user.user_id, "Non-admin attempted admin access");
                Err(create_api_error(ApiResponse::forbidden(
                    "FORBIDDEN",
                    "Admin access required",
                )))
            }
        });

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
