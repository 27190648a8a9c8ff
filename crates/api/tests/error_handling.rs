//! Cross-cutting error behaviour: consistent JSON error bodies, extractor
//! rejections, and the request-id middleware.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_body_shape(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, body) = common::get(&app, "/api/v1/locations/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Location with id 12345 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_body_shape(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, body) = common::post_json(
        &app,
        "/api/v1/locations",
        &json!({"name": "", "city": "X", "country": "Y"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/locations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_content_type_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/locations")
        .body(Body::from(r#"{"name":"X","city":"Y","country":"Z"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, _) = common::get(&app, "/api/v1/locations/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_header_set(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(
        response.headers().contains_key("x-request-id"),
        "responses should carry a request id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_propagated(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "test-correlation-id")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );
}
