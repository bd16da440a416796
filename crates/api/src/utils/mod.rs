//! Shared helpers for HTTP commands

pub mod command_helpers;
pub mod logging;
