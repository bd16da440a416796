//! Moderation flags: the facade and the flag store port it delegates to.

pub mod ports;
pub mod service;

pub use service::FlagService;
