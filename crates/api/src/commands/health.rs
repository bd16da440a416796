//! Liveness probe

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Report that the process is serving requests.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok".to_string() })
}
