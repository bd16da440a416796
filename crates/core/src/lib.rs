//! # Flagdesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the flag store and privilege
//!   service
//! - The flag API facade ([`FlagService`])
//! - Clock and detached-task helpers
//!
//! ## Architecture Principles
//! - Only depends on `flagdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clock;
pub mod flags;
pub mod tasks;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, FixedClock, SystemClock};
pub use flags::ports::FlagsPort;
pub use flags::FlagService;
pub use tasks::DetachedTasks;
pub use user::ports::PrivilegesPort;
