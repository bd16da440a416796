//! # Flagdesk Domain
//!
//! Business domain types for moderation flags.
//!
//! This crate contains:
//! - Flag, note and history data types
//! - Request shapes accepted by the flag facade
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other Flagdesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
