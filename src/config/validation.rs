//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("serializer.max_depth must be greater than zero")]
    ZeroMaxDepth,

    #[error("auth.realm must not be empty")]
    EmptyRealm,

    #[error("auth.realm contains a quote or control character")]
    InvalidRealm,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.serializer.max_depth == Some(0) {
        errors.push(ValidationError::ZeroMaxDepth);
    }

    let realm = &config.auth.realm;
    if realm.is_empty() {
        errors.push(ValidationError::EmptyRealm);
    } else if realm.chars().any(|c| c == '"' || c.is_control()) {
        errors.push(ValidationError::InvalidRealm);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
