//! User-facing collaborators

pub mod ports;
