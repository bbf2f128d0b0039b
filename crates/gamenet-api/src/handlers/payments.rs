//! Payments listing and payment method lookup

use crate::extractors::{ExtractorError, GridParams};
use crate::handlers::grid::{GridResponse, render_grid};
use crate::state::AppState;
use axum::{extract::State, response::Json};
use gamenet_core::types::{PAYMENT_METHODS, Payment, PaymentField};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Payment method entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    /// Key stored on payments
    pub key: &'static str,
    /// Persian label
    pub label: &'static str,
}

/// List payments with search, sort and pagination
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters, unknown field keys or an
///   oversized page
///
/// # Example
///
/// ```text
/// GET /api/payments?search=علی&sort=amount&dir=desc&page=1&per_page=10
/// ```
pub async fn list_payments(
    State(state): State<Arc<AppState>>,
    params: GridParams,
) -> Result<Json<GridResponse<Payment>>, ExtractorError> {
    let query = params.to_query::<PaymentField>(&state.config.grid)?;

    info!(
        search = %query.search,
        page = query.page,
        per_page = query.page_size,
        "Listing payments"
    );

    Ok(Json(render_grid(
        &state.dataset.payments,
        &Payment::columns(),
        &query,
    )))
}

/// Known payment methods
pub async fn list_payment_methods() -> Json<Vec<PaymentMethod>> {
    Json(
        PAYMENT_METHODS
            .iter()
            .map(|&(key, label)| PaymentMethod { key, label })
            .collect(),
    )
}
