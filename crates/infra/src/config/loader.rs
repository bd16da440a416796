//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FLAGDESK_BIND_ADDR`: Socket address the HTTP server binds to
//! - `FLAGDESK_PRIVILEGED_UIDS`: Comma-separated moderator/admin uids
//! - `FLAGDESK_LOG_FILTER`: `EnvFilter` directives (optional)
//! - `FLAGDESK_LOG_JSON`: Emit JSON log lines (true/false, optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./flagdesk.json` or `./flagdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use flagdesk_domain::{
    Config, FlagsError, LoggingConfig, ModerationConfig, Result, ServerConfig, Uid,
};

pub const ENV_BIND_ADDR: &str = "FLAGDESK_BIND_ADDR";
pub const ENV_PRIVILEGED_UIDS: &str = "FLAGDESK_PRIVILEGED_UIDS";
pub const ENV_LOG_FILTER: &str = "FLAGDESK_LOG_FILTER";
pub const ENV_LOG_JSON: &str = "FLAGDESK_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `FlagsError::Config` if configuration cannot be loaded from
/// either source, or the source that was found is malformed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `FLAGDESK_BIND_ADDR` and `FLAGDESK_PRIVILEGED_UIDS` are required; the
/// logging variables fall back to [`LoggingConfig::default`].
///
/// # Errors
/// Returns `FlagsError::Config` if required variables are missing or a uid
/// in the list is not numeric.
pub fn load_from_env() -> Result<Config> {
    let bind_addr = env_var(ENV_BIND_ADDR)?;
    let privileged_uids = env_var(ENV_PRIVILEGED_UIDS).and_then(|s| parse_uid_list(&s))?;

    let defaults = LoggingConfig::default();
    let filter = std::env::var(ENV_LOG_FILTER).unwrap_or(defaults.filter);
    let json = env_bool(ENV_LOG_JSON, defaults.json);

    Ok(Config {
        server: ServerConfig { bind_addr },
        moderation: ModerationConfig { privileged_uids },
        logging: LoggingConfig { filter, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`]. Format is picked from the file extension.
///
/// # Errors
/// Returns `FlagsError::Config` if the file is missing, unreadable, or not
/// valid JSON/TOML for [`Config`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FlagsError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FlagsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FlagsError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FlagsError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FlagsError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(FlagsError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first candidate that exists, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("flagdesk.json"),
        dir.join("flagdesk.toml"),
    ]
}

/// Parse a comma-separated uid list. Blank entries are skipped, so an empty
/// variable yields no privileged users.
fn parse_uid_list(raw: &str) -> Result<Vec<Uid>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Uid>()
                .map_err(|e| FlagsError::Config(format!("Invalid privileged uid '{}': {}", s, e)))
        })
        .collect()
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| FlagsError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` when the variable is not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
