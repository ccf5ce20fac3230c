//! End-to-end tests for the demo routes.

use axum::http::{header, StatusCode};
use cms_response::AppConfig;
use serde_json::Value;

mod common;

fn protected_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.realm = "cms admin".into();
    config.auth.credentials = "YWRtaW46c2VjcmV0".into();
    config
}

#[tokio::test]
async fn test_status_is_json() {
    let response = common::get(common::app(AppConfig::default()), "/status", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        response.headers()[header::EXPIRES],
        "Thu, 01 Jan 1970 00:00:00 GMT"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found_envelope() {
    let response = common::get(common::app(AppConfig::default()), "/articles/42", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert!(response.headers().get(header::EXPIRES).is_none());
    assert_eq!(
        common::body_string(response).await,
        r#"{"error":404,"message":"resource not found"}"#
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = common::get(
        common::app(AppConfig::default()),
        "/status",
        &[("x-request-id", "req-123")],
    )
    .await;
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_admin_open_without_credentials() {
    let response = common::get(common::app(AppConfig::default()), "/admin/status", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_challenges_missing_credentials() {
    let response = common::get(common::app(protected_config()), "/admin/status", &[]).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::WWW_AUTHENTICATE],
        "Basic realm=\"cms admin\""
    );
    assert!(common::body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_admin_challenges_wrong_credentials() {
    let response = common::get(
        common::app(protected_config()),
        "/admin/status",
        &[("authorization", "Basic d3Jvbmc6d3Jvbmc=")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_accepts_credentials() {
    let response = common::get(
        common::app(protected_config()),
        "/admin/status",
        &[("authorization", "Basic YWRtaW46c2VjcmV0")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_accepts_lowercase_scheme() {
    let response = common::get(
        common::app(protected_config()),
        "/admin/status",
        &[("authorization", "basic YWRtaW46c2VjcmV0")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_public_status_ignores_auth() {
    let response = common::get(common::app(protected_config()), "/status", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
}
