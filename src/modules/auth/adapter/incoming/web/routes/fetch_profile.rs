use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Current user
///
/// Profile fields, chosen stream, skill progress and course progress with course summaries.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the caller"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, "Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::UserProfileView;
    use crate::auth::application::use_cases::fetch_profile::FetchProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{token_provider_data, user_bearer, TEST_USER_ID};
    use crate::tests::support::fixtures::sample_profile;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockFetch(Option<FetchProfileError>);

    #[async_trait]
    impl FetchProfileUseCase for MockFetch {
        async fn execute(&self, user_id: UserId) -> Result<UserProfileView, FetchProfileError> {
            assert_eq!(user_id.value(), TEST_USER_ID);
            match &self.0 {
                Some(e) => Err(e.clone()),
                None => Ok(sample_profile()),
            }
        }
    }

    async fn get_me(mock: MockFetch, auth: Option<String>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_fetch_profile(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(fetch_profile_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/api/auth/me");
        if let Some(auth) = auth {
            req = req.insert_header(("Authorization", auth));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_profile_for_token_subject() {
        let (status, body) = get_me(MockFetch(None), Some(user_bearer())).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["id"], TEST_USER_ID.to_string());
        assert_eq!(body["data"]["stream"], serde_json::Value::Null);
        assert!(body["data"]["skillProgress"].is_array());
        assert!(body["data"]["courseProgress"].is_array());
    }

    #[actix_web::test]
    async fn requires_token() {
        let (status, _) = get_me(MockFetch(None), None).await;

        assert_eq!(status, 401);
    }

    #[actix_web::test]
    async fn deleted_account_is_not_found() {
        let (status, body) = get_me(
            MockFetch(Some(FetchProfileError::UserNotFound)),
            Some(user_bearer()),
        )
        .await;

        assert_eq!(status, 404);
        assert_eq!(body["code"], "USER_NOT_FOUND");
    }
}
