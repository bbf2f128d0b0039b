//! API route definitions

use crate::{handlers, state::AppState};
use axum::{Json, Router, http::StatusCode, routing::get};
use gamenet_core::types::ErrorResponse;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Grid listings and lookups
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api", get(api_info))
        .route("/api/payments", get(handlers::payments::list_payments))
        .route(
            "/api/payment-methods",
            get(handlers::payments::list_payment_methods),
        )
        .route(
            "/api/subscriptions",
            get(handlers::subscriptions::list_subscriptions),
        )
        .layer(CompressionLayer::new())
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes())
        .merge(health_routes())
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "The requested endpoint does not exist",
            "ROUTE_NOT_FOUND",
        )),
    )
}

/// API info endpoint
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "api": "Gamenet Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "payments": "/api/payments",
            "payment_methods": "/api/payment-methods",
            "subscriptions": "/api/subscriptions",
            "health": "/health"
        }
    }))
}
