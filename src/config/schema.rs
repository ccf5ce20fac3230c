//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// JSON serializer settings.
    pub serializer: SerializerConfig,

    /// Basic auth challenge settings.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// JSON serializer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Deepest container level kept in payloads. `None` disables the limit.
    pub max_depth: Option<usize>,

    /// Pretty-print response bodies.
    pub pretty: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(8),
            pretty: false,
        }
    }
}

/// Basic auth settings for protected routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Realm announced in the `WWW-Authenticate` challenge.
    pub realm: String,

    /// Expected base64 `user:password` token. Empty disables the check.
    pub credentials: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: "cms".to_string(),
            credentials: String::new(),
        }
    }
}

impl AuthConfig {
    pub fn enabled(&self) -> bool {
        !self.credentials.is_empty()
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.serializer.max_depth, Some(8));
        assert_eq!(config.auth.realm, "cms");
        assert!(!config.auth.enabled());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [serializer]
            pretty = true

            [auth]
            credentials = "YWRtaW46c2VjcmV0"
            "#,
        )
        .unwrap();

        assert!(config.serializer.pretty);
        assert_eq!(config.serializer.max_depth, Some(8));
        assert!(config.auth.enabled());
        assert_eq!(config.auth.realm, "cms");
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
