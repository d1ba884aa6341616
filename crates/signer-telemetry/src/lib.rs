//! # Signer Telemetry
//!
//! Structured logging for signed-link services, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signer_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     tracing::info!("ready");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `US_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `US_JSON_LOGS` | `false` | JSON output (defaults to true in containers) |
//! | `US_CONSOLE_OUTPUT` | `true` | Emit logs to stderr at all |
//! | `US_SERVICE_NAME` | `url-signer` | Name reported at startup |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed (usually already set)
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The log filter did not parse
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global tracing subscriber.
///
/// Call once from the composition root. Logs go to stderr so that command
/// output on stdout stays machine readable.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        level = %config.log_level,
        "Telemetry initialized"
    );

    Ok(())
}
