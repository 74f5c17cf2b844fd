use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::use_cases::list_login_logs::ListLoginLogsQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginLogsParams {
    /// Defaults to 100, capped at 500
    pub limit: Option<u64>,
}

/// Newest login attempts first, with success and failure totals.
#[utoipa::path(
    get,
    path = "/api/admin/login-logs",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(LoginLogsParams),
    responses(
        (status = 200, description = "Login log entries and totals"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/login-logs")]
pub async fn list_login_logs_handler(
    admin: AdminUser,
    params: web::Query<LoginLogsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListLoginLogsQuery::new(params.limit);

    match data.auth.list_login_logs.execute(query).await {
        Ok(report) => ApiResponse::success(report),
        Err(e) => {
            error!(admin_id = %admin.user_id, "Failed to list login logs: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::LoginStats;
    use crate::auth::application::use_cases::list_login_logs::{
        ListLoginLogsError, ListLoginLogsUseCase, LoginLogReport,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data, user_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogs;

    #[async_trait]
    impl ListLoginLogsUseCase for MockLogs {
        async fn execute(
            &self,
            query: ListLoginLogsQuery,
        ) -> Result<LoginLogReport, ListLoginLogsError> {
            Ok(LoginLogReport {
                logs: Vec::new(),
                stats: LoginStats {
                    total: query.limit(),
                    successful: 0,
                    failed: 0,
                },
            })
        }
    }

    async fn call(uri: &str, bearer: String) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_list_login_logs(MockLogs)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(list_login_logs_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn admin_gets_report_with_clamped_limit() {
        let (status, body) = call("/api/admin/login-logs?limit=9000", admin_bearer()).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["stats"]["total"], 500);
        assert!(body["data"]["logs"].is_array());
    }

    #[actix_web::test]
    async fn default_limit_applies() {
        let (_, body) = call("/api/admin/login-logs", admin_bearer()).await;

        assert_eq!(body["data"]["stats"]["total"], 100);
    }

    #[actix_web::test]
    async fn plain_user_is_forbidden() {
        let (status, body) = call("/api/admin/login-logs", user_bearer()).await;

        assert_eq!(status, 403);
        assert_eq!(body["code"], "FORBIDDEN");
    }
}
