// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Turns unparsable path segments (e.g. a malformed UUID) into a 400 envelope
/// instead of actix's default 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_ID", "Malformed identifier in path"),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    #[post("/echo")]
    async fn echo(_payload: web::Json<Payload>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[get("/items/{id}")]
    async fn item(_id: web::Path<Uuid>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_json_is_wrapped_in_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"nam\": 1}")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn malformed_uuid_returns_invalid_id() {
        let app = test::init_service(
            App::new()
                .app_data(custom_path_config())
                .service(item),
        )
        .await;

        let req = test::TestRequest::get().uri("/items/not-a-uuid").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_ID");
    }
}
