//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, auth gate)
//! - Bind server to listener

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderName, Request},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, AuthConfig};
use crate::http::auth::basic_auth_middleware;
use crate::http::error::ApiError;
use crate::http::response::ResponseFactory;
use crate::serialization::JsonSerializer;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub factory: ResponseFactory,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            factory: ResponseFactory::new(JsonSerializer::new(&config.serializer)),
            auth: Arc::new(config.auth.clone()),
        }
    }
}

/// HTTP server exposing the status endpoints.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);

        let admin = Router::new()
            .route("/admin/status", get(get_status))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                basic_auth_middleware,
            ));

        #[allow(deprecated)]
        let timeout = TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs));

        Router::new()
            .route("/status", get(get_status))
            .merge(admin)
            .fallback(fallback)
            .with_state(state)
            .layer(timeout)
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    /// Router with all layers applied, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

async fn get_status(State(state): State<AppState>) -> Result<Response, ApiError> {
    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    };
    Ok(state.factory.json(&status)?)
}

async fn fallback(request: Request<axum::body::Body>) -> Result<Response, ApiError> {
    tracing::debug!(path = %request.uri().path(), "No route matched");
    Ok(ResponseFactory::not_found("resource not found")?)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
