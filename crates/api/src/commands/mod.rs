//! HTTP commands - forum client to flag facade bridge

mod caller;
mod flags;
mod health;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

pub use caller::AuthenticatedCaller;
pub use flags::*;
pub use health::*;

use crate::context::AppContext;

/// Routes served by the flag API, before state is attached.
pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/api/v3/flags", post(create_flag))
        .route("/api/v3/flags/{flag_id}", put(update_flag))
        .route("/api/v3/flags/{flag_id}/notes", post(append_flag_note))
        .route("/api/v3/flags/{flag_id}/notes/{datetime}", delete(delete_flag_note))
        .route("/health", get(health_check))
}
