//! JSON serialization of response payloads.
//!
//! # Data Flow
//! ```text
//! payload (any Serialize)
//!     → json.rs (JsonSerializer, options)
//!     → depth.rs (drop containers nested past the limit)
//!     → JSON text handed to the response body
//! ```

pub mod depth;
pub mod json;

pub use json::{JsonSerializer, SerializeOptions};
