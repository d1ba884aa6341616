//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "url-signer".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `US_SERVICE_NAME`: Service name (default: url-signer)
    /// - `US_LOG_LEVEL`, then `RUST_LOG`: Log level (default: info)
    /// - `US_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `US_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("US_SERVICE_NAME").unwrap_or_else(|_| "url-signer".to_string()),

            log_level: resolve_log_level(env::var("US_LOG_LEVEL").ok(), env::var("RUST_LOG").ok()),

            console_output: env::var("US_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("US_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Override the log level, keeping everything else.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

/// `US_LOG_LEVEL` wins over `RUST_LOG`; empty values are skipped.
fn resolve_log_level(us_log_level: Option<String>, rust_log: Option<String>) -> String {
    us_log_level
        .into_iter()
        .chain(rust_log)
        .find(|level| !level.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}
