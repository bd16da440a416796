//! # Flagdesk Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - In-memory reference adapters for the flag store and privilege service
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `flagdesk-core`
//! - Depends on `flagdesk-domain` and `flagdesk-core`
//! - Contains all "impure" code (I/O, environment access)

pub mod config;
pub mod memory;

// Re-export commonly used items
pub use memory::{FlagNotification, InMemoryFlagStore, StaticPrivileges};
