//! In-memory adapters
//!
//! Reference implementations of the core ports. State lives in process
//! memory behind `parking_lot` locks; nothing survives a restart.

pub mod flag_store;
pub mod privileges;

pub use flag_store::{FlagNotification, InMemoryFlagStore};
pub use privileges::StaticPrivileges;
