use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::feedback::application::ports::incoming::use_cases::{
    SubmitFeedbackCommand, SubmitFeedbackError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub comment: String,
    /// 1 to 5
    pub rating: i64,
}

/// Leave feedback about the platform
#[utoipa::path(
    post,
    path = "/api/user/feedback",
    tag = "feedback",
    security(("BearerAuth" = [])),
    request_body = FeedbackRequest,
    responses(
        (status = 201, description = "Feedback stored"),
        (status = 400, description = "Blank comment or rating out of range", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/user/feedback")]
pub async fn submit_feedback_handler(
    user: AuthenticatedUser,
    req: web::Json<FeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SubmitFeedbackCommand::new(&req.comment, req.rating) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.feedback.submit.execute(user.user_id, command).await {
        Ok(feedback) => ApiResponse::created(feedback),
        Err(SubmitFeedbackError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SubmitFeedbackError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to store feedback: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::feedback::application::domain::Feedback;
    use crate::feedback::application::ports::incoming::use_cases::SubmitFeedbackUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{token_provider_data, user_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    struct MockSubmit;

    #[async_trait]
    impl SubmitFeedbackUseCase for MockSubmit {
        async fn execute(
            &self,
            user_id: UserId,
            command: SubmitFeedbackCommand,
        ) -> Result<Feedback, SubmitFeedbackError> {
            Ok(Feedback {
                id: Uuid::new_v4(),
                user: user_id,
                comment: command.comment().to_string(),
                rating: command.rating(),
                created_at: Utc::now(),
            })
        }
    }

    async fn post(body: serde_json::Value, bearer: Option<String>) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_feedback(MockSubmit)
                        .build(),
                )
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(submit_feedback_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/user/feedback").set_json(body);
        if let Some(bearer) = bearer {
            req = req.insert_header(("Authorization", bearer));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn created_with_trimmed_comment() {
        let (status, body) = post(json!({ "comment": " Great guidance ", "rating": 5 }), Some(user_bearer())).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["comment"], "Great guidance");
        assert_eq!(body["data"]["rating"], 5);
    }

    #[actix_web::test]
    async fn rating_out_of_range_is_400() {
        let (status, body) = post(json!({ "comment": "Hmm", "rating": 6 }), Some(user_bearer())).await;

        assert_eq!(status, 400);
        assert_eq!(body["message"], "Rating must be between 1 and 5");
    }

    #[actix_web::test]
    async fn blank_comment_is_400() {
        let (status, body) = post(json!({ "comment": "   ", "rating": 4 }), Some(user_bearer())).await;

        assert_eq!(status, 400);
        assert_eq!(body["message"], "Comment is required");
    }

    #[actix_web::test]
    async fn requires_a_token() {
        let (status, _) = post(json!({ "comment": "Hi", "rating": 4 }), None).await;

        assert_eq!(status, 401);
    }
}
