//! Basic auth gate for protected routes.
//!
//! Credentials are compared as the raw base64 token; they are never decoded.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::http::response::ResponseFactory;
use crate::http::server::AppState;

pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let auth = &state.auth;
    if !auth.enabled() {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(auth_val) = provided {
        if credentials_match(auth_val, &auth.credentials) {
            return next.run(request).await;
        }
    }

    match ResponseFactory::unauthorized(&auth.realm) {
        Ok(response) => response,
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// The scheme is matched case-insensitively; the token must match exactly.
fn credentials_match(header_value: &str, expected: &str) -> bool {
    match header_value.split_once(' ') {
        Some((scheme, token)) => scheme.eq_ignore_ascii_case("basic") && token.trim() == expected,
        None => false,
    }
}
