//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for flag operations.
///
/// Every variant maps to a stable translation key (see [`FlagsError::code`])
/// that forum clients resolve into a localized message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FlagsError {
    #[error("Invalid data")]
    InvalidData,

    #[error("No privileges")]
    NoPrivileges,

    #[error("Flag not found")]
    NoFlag,

    #[error("Post not found")]
    NoPost,

    #[error("User not found")]
    NoUser,

    #[error("Target already flagged by this user")]
    AlreadyFlagged,

    #[error("Users cannot flag their own content")]
    SelfFlag,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FlagsError {
    /// Translation key surfaced to forum clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidData => "[[error:invalid-data]]",
            Self::NoPrivileges => "[[error:no-privileges]]",
            Self::NoFlag => "[[error:no-flag]]",
            Self::NoPost => "[[error:no-post]]",
            Self::NoUser => "[[error:no-user]]",
            Self::AlreadyFlagged => "[[error:already-flagged]]",
            Self::SelfFlag => "[[error:cant-flag-self]]",
            Self::Config(_) | Self::Storage(_) | Self::Internal(_) => "[[error:internal]]",
        }
    }

    /// Whether this is the "not found" signal of a note lookup.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData)
    }
}

/// Result type alias for flag operations
pub type Result<T> = std::result::Result<T, FlagsError>;
