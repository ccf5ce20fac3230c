//! Shared utilities for integration tests.

use axum::{body::Body, http::Request, response::Response, Router};
use cms_response::{AppConfig, HttpServer};
use tower::ServiceExt;

/// Build the fully layered router for `config`.
#[allow(dead_code)]
pub fn app(config: AppConfig) -> Router {
    HttpServer::new(config).router()
}

/// Send a GET for `path` with optional extra headers.
pub async fn get(router: Router, path: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
