use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::ports::incoming::use_cases::BrowseCatalogError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// A stream with its sub-domains
#[utoipa::path(
    get,
    path = "/api/user/career-path/{stream_id}",
    tag = "catalog",
    security(("BearerAuth" = [])),
    params(("stream_id" = Uuid, Path, description = "Stream id")),
    responses(
        (status = 200, description = "Stream with embedded sub-domains"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Stream not found", body = ErrorResponse),
    )
)]
#[get("/api/user/career-path/{stream_id}")]
pub async fn get_career_path_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let stream_id = path.into_inner();

    match data.catalog.browse.career_path(stream_id).await {
        Ok(path) => ApiResponse::success(path),
        Err(BrowseCatalogError::StreamNotFound) => {
            ApiResponse::not_found("STREAM_NOT_FOUND", "Stream not found")
        }
        Err(BrowseCatalogError::QueryFailed(e)) => {
            error!(stream_id = %stream_id, "Failed to load career path: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::domain::{RoleView, StreamWithSubDomains};
    use crate::catalog::application::ports::incoming::use_cases::BrowseCatalogUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{token_provider_data, user_bearer};
    use crate::tests::support::fixtures::sample_stream;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockBrowse {
        found: bool,
    }

    #[async_trait]
    impl BrowseCatalogUseCase for MockBrowse {
        async fn list_streams(&self) -> Result<Vec<StreamWithSubDomains>, BrowseCatalogError> {
            unimplemented!("Not used in this test")
        }

        async fn career_path(
            &self,
            _stream_id: Uuid,
        ) -> Result<StreamWithSubDomains, BrowseCatalogError> {
            if !self.found {
                return Err(BrowseCatalogError::StreamNotFound);
            }
            Ok(StreamWithSubDomains {
                stream: sample_stream(),
                sub_domains: vec![],
            })
        }

        async fn roles_by_sub_domain(
            &self,
            _sub_domain_id: Uuid,
        ) -> Result<Vec<RoleView>, BrowseCatalogError> {
            unimplemented!("Not used in this test")
        }
    }

    async fn call(found: bool, bearer: Option<String>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_browse_catalog(MockBrowse { found })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_career_path_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri(&format!("/api/user/career-path/{}", Uuid::new_v4()));
        if let Some(bearer) = bearer {
            req = req.insert_header(("Authorization", bearer));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_stream_for_signed_in_user() {
        let (status, body) = call(true, Some(user_bearer())).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["name"], "Computer Science & Engineering");
    }

    #[actix_web::test]
    async fn missing_stream_is_404() {
        let (status, body) = call(false, Some(user_bearer())).await;

        assert_eq!(status, 404);
        assert_eq!(body["code"], "STREAM_NOT_FOUND");
    }

    #[actix_web::test]
    async fn requires_a_token() {
        let (status, _) = call(true, None).await;

        assert_eq!(status, 401);
    }
}
