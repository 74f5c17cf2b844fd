use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// All streams with their sub-domains
#[utoipa::path(
    get,
    path = "/api/user/streams",
    tag = "catalog",
    responses(
        (status = 200, description = "Streams with embedded sub-domains"),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/user/streams")]
pub async fn list_streams_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.browse.list_streams().await {
        Ok(streams) => ApiResponse::success(streams),
        Err(e) => {
            error!("Failed to list streams: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::ports::incoming::use_cases::BrowseCatalogError;
    use crate::catalog::application::domain::{RoleView, StreamWithSubDomains};
    use crate::catalog::application::ports::incoming::use_cases::BrowseCatalogUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_stream;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockBrowse {
        fail: bool,
    }

    #[async_trait]
    impl BrowseCatalogUseCase for MockBrowse {
        async fn list_streams(&self) -> Result<Vec<StreamWithSubDomains>, BrowseCatalogError> {
            if self.fail {
                return Err(BrowseCatalogError::QueryFailed("db down".into()));
            }
            Ok(vec![StreamWithSubDomains {
                stream: sample_stream(),
                sub_domains: vec![],
            }])
        }

        async fn career_path(
            &self,
            _stream_id: Uuid,
        ) -> Result<StreamWithSubDomains, BrowseCatalogError> {
            unimplemented!("Not used in this test")
        }

        async fn roles_by_sub_domain(
            &self,
            _sub_domain_id: Uuid,
        ) -> Result<Vec<RoleView>, BrowseCatalogError> {
            unimplemented!("Not used in this test")
        }
    }

    #[actix_web::test]
    async fn lists_streams_without_a_token() {
        let app_state = TestAppStateBuilder::default()
            .with_browse_catalog(MockBrowse { fail: false })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(list_streams_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/user/streams").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["slug"], "cse");
        assert_eq!(body["data"][0]["subDomains"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn query_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_browse_catalog(MockBrowse { fail: true })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(list_streams_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/user/streams").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
    }
}
