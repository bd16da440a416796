//! # Flagdesk API
//!
//! HTTP layer - axum routes and the `flagdesk` binary.
//!
//! This crate contains:
//! - HTTP commands (forum client → flag facade bridge)
//! - Application context (dependency injection)
//! - Logging bootstrap and command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps facade errors onto HTTP responses

pub mod commands;
pub mod context;
pub mod error;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use commands::*;
pub use context::*;
pub use error::ApiError;

/// Assemble the application router with tracing middleware and state.
pub fn app(ctx: Arc<AppContext>) -> Router {
    commands::router().layer(TraceLayer::new_for_http()).with_state(ctx)
}
