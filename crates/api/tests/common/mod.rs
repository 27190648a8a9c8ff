//! Shared harness for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) over a
//! per-test database and drives it in-process with `tower::ServiceExt`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use marquee_api::cache::ResponseCache;
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

/// Deterministic configuration, independent of the environment.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 5,
        shutdown_timeout_secs: 1,
        cache_ttl_secs: 300,
        cache_sweep_interval_secs: 600,
        default_radius_km: 50.0,
        default_page_limit: 20,
        max_page_limit: 100,
    }
}

/// Build the full application router over the given pool.
///
/// No sweeper task is started; tests exercise cache expiry directly where
/// they need to.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        cache: Arc::new(ResponseCache::new(Duration::from_secs(
            config.cache_ttl_secs,
        ))),
    };
    build_app_router(state, &config)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            panic!("non-JSON body for {uri}: {e}: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// POST a payload and return the created row's id, asserting 201.
pub async fn create_entity(app: &Router, uri: &str, body: &Value) -> i64 {
    let (status, json) = post_json(app, uri, body).await;
    assert_eq!(status, StatusCode::CREATED, "create {uri} failed: {json}");
    json["id"].as_i64().expect("created row should carry an id")
}
