//! HTTP response subsystem.
//!
//! # Data Flow
//! ```text
//! handler / middleware
//!     → response.rs (ResponseFactory writes through a ResponseHandle)
//!     → status.rs (status code table)
//!     → error.rs (ResponseError, ApiError envelope)
//!     → axum sends the response
//! ```

pub mod auth;
pub mod error;
pub mod response;
pub mod server;
pub mod status;

pub use error::{ApiError, ResponseError, ResponseResult};
pub use response::{ResponseFactory, ResponseHandle};
pub use server::{AppState, HttpServer};
