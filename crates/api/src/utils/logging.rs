//! Logging bootstrap and structured command logging

use std::time::Duration;

use flagdesk_domain::{FlagsError, LoggingConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| format!("invalid log filter '{}': {e}", config.filter))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(fmt::layer().json().with_current_span(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| format!("failed to install tracing subscriber: {e}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Log why a command failed. Expected client errors stay at debug.
#[inline]
pub fn log_command_failure(command: &str, error: &FlagsError) {
    let error_type = error_label(error);
    match error {
        FlagsError::Config(_) | FlagsError::Storage(_) | FlagsError::Internal(_) => {
            warn!(command, error_type, %error, "command_error");
        }
        _ => debug!(command, error_type, %error, "command_error"),
    }
}

/// Convert a `FlagsError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &FlagsError) -> &'static str {
    match error {
        FlagsError::InvalidData => "invalid_data",
        FlagsError::NoPrivileges => "no_privileges",
        FlagsError::NoFlag => "no_flag",
        FlagsError::NoPost => "no_post",
        FlagsError::NoUser => "no_user",
        FlagsError::AlreadyFlagged => "already_flagged",
        FlagsError::SelfFlag => "self_flag",
        FlagsError::Config(_) => "config",
        FlagsError::Storage(_) => "storage",
        FlagsError::Internal(_) => "internal",
    }
}
