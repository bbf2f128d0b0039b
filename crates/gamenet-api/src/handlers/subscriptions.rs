//! Subscriptions listing

use crate::extractors::{ExtractorError, GridParams};
use crate::handlers::grid::{GridResponse, render_grid};
use crate::state::AppState;
use axum::{extract::State, response::Json};
use gamenet_core::types::{Subscription, SubscriptionField};
use std::sync::Arc;
use tracing::info;

/// List subscriptions with search, sort and pagination
///
/// # Errors
///
/// * `BAD_REQUEST` - Invalid query parameters, unknown field keys or an
///   oversized page
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    params: GridParams,
) -> Result<Json<GridResponse<Subscription>>, ExtractorError> {
    let query = params.to_query::<SubscriptionField>(&state.config.grid)?;

    info!(
        search = %query.search,
        page = query.page,
        per_page = query.page_size,
        "Listing subscriptions"
    );

    Ok(Json(render_grid(
        &state.dataset.subscriptions,
        &Subscription::columns(),
        &query,
    )))
}
