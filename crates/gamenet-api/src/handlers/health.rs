//! Health check endpoints for monitoring

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Loaded dataset sizes
    pub dataset: DatasetHealth,
    /// Seconds since startup
    pub uptime_seconds: u64,
}

/// Dataset sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetHealth {
    /// Number of payments
    pub payments: usize,
    /// Number of subscriptions
    pub subscriptions: usize,
}

/// Basic health check endpoint for monitoring systems
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2024-03-15T14:25:30Z",
///   "dataset": { "payments": 120, "subscriptions": 45 },
///   "uptime_seconds": 3600
/// }
/// ```
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        dataset: DatasetHealth {
            payments: state.dataset.payments.len(),
            subscriptions: state.dataset.subscriptions.len(),
        },
        uptime_seconds: state.uptime_seconds(),
    };

    debug!("Health check completed");
    Json(response)
}
