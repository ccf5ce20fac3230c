//! JSON response formatting for axum applications.

pub mod config;
pub mod http;
pub mod observability;
pub mod serialization;

pub use config::AppConfig;
pub use http::{ApiError, HttpServer, ResponseError, ResponseFactory, ResponseHandle};
pub use serialization::JsonSerializer;
