//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Response writes produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (per-operation, per-status counters)
//!
//! Consumers:
//!     → stdout log lines
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
