//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER};
use crate::types::Uid;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub moderation: ModerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Moderation configuration
///
/// `privileged_uids` lists administrators and global moderators. It backs
/// the static privilege directory used when no external user service is
/// wired in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationConfig {
    pub privileged_uids: Vec<Uid>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { bind_addr: DEFAULT_BIND_ADDR.to_string() },
            moderation: ModerationConfig { privileged_uids: Vec::new() },
            logging: LoggingConfig::default(),
        }
    }
}
