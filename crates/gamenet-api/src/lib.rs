//! Gamenet admin dashboard API server library

#![forbid(unsafe_code)]

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use gamenet_core::{Config, Dataset, Result};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Build the API router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the configuration or the dataset fails validation.
pub fn build_router(config: Config, dataset: Dataset) -> Result<Router> {
    let timeout = Duration::from_secs(config.server.request_timeout);
    let state = Arc::new(AppState::new(config, dataset)?);

    let app = routes::build_router()
        .layer(TimeoutLayer::new(timeout))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unreadable_literal)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use gamenet_core::types::{Payment, PaymentStatus, Subscription, SubscriptionStatus};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn dataset() -> Dataset {
        let names = ["علی رضایی", "سارا احمدی", "رضا محمدی", "مریم کریمی", "Kian"];
        let payments = (1..=25u64)
            .map(|id| Payment {
                id,
                customer_name: names[usize::try_from(id).unwrap() % names.len()].to_string(),
                amount: i64::try_from(id % 7).unwrap() * 15_000 + 30_000,
                method: if id % 2 == 0 { "card" } else { "cash" }.to_string(),
                status: if id % 5 == 0 {
                    PaymentStatus::Pending
                } else {
                    PaymentStatus::Paid
                },
                paid_on: (id % 5 != 0).then(|| date(u32::try_from(id).unwrap())),
                description: None,
            })
            .collect();
        let subscriptions = vec![Subscription {
            id: 1,
            customer_name: "مریم کریمی".to_string(),
            plan: "طلایی".to_string(),
            status: SubscriptionStatus::Active,
            started_on: date(1),
            expires_on: None,
            hours_total: 40,
            hours_used: 10,
        }];
        Dataset {
            payments,
            subscriptions,
        }
    }

    fn app() -> Router {
        build_router(Config::default(), dataset()).unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_payments_first_page() {
        let (status, body) = get_json("/api/payments").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"].as_array().unwrap().len(), 10);
        assert_eq!(body["pagination"]["total_items"], 25);
        assert_eq!(body["pagination"]["total_pages"], 3);
        assert_eq!(body["pagination"]["has_prev"], false);
        assert_eq!(body["pagination"]["window"], serde_json::json!([1, 2, 3]));
        assert_eq!(body["columns"][0]["key"], "id");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let (status, body) = get_json("/api/payments?page=99").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["rows"].as_array().unwrap().is_empty());
        assert_eq!(body["pagination"]["page"], 99);
        assert_eq!(body["pagination"]["has_next"], false);
    }

    #[tokio::test]
    async fn test_sort_amount_descending() {
        let (status, body) = get_json("/api/payments?sort=amount&dir=desc&per_page=25").await;

        assert_eq!(status, StatusCode::OK);
        let amounts: Vec<i64> = body["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["record"]["amount"].as_i64().unwrap())
            .collect();
        let mut expected = amounts.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(amounts, expected);
        assert_eq!(amounts[0], 120_000);
    }

    #[tokio::test]
    async fn test_persian_search_on_restricted_fields() {
        // "%D8%B1%D8%B6%D8%A7" is رضا
        let (status, body) =
            get_json("/api/payments?search=%D8%B1%D8%B6%D8%A7&fields=customer_name").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(body["pagination"]["total_items"], 10);
        assert!(rows.iter().all(|row| {
            row["record"]["customer_name"]
                .as_str()
                .unwrap()
                .contains("رضا")
        }));
    }

    #[tokio::test]
    async fn test_search_uses_stored_method_key() {
        let (status, body) = get_json("/api/payments?search=cash&fields=method").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["total_items"], 13);
        assert_eq!(body["rows"][0]["record"]["method"], "cash");
        assert_eq!(body["rows"][0]["display"]["method"], "نقدی");
    }

    #[tokio::test]
    async fn test_row_display_and_badge() {
        let (_, body) = get_json("/api/payments?per_page=5").await;
        let fifth = &body["rows"][4];

        assert_eq!(fifth["record"]["id"], 5);
        assert_eq!(fifth["display"]["paid_on"], "-");
        assert_eq!(fifth["badge"]["tone"], "warning");
        assert_eq!(fifth["display"]["method"], "نقدی");
    }

    #[tokio::test]
    async fn test_list_subscriptions() {
        let (status, body) = get_json("/api/subscriptions?sort=hours_used").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"][0]["display"]["hours_used"], "۱۰ از ۴۰ ساعت (۲۵٪)");
        assert_eq!(body["rows"][0]["badge"]["label"], "فعال");
    }

    #[tokio::test]
    async fn test_invalid_parameters_are_rejected() {
        for uri in [
            "/api/payments?page=0",
            "/api/payments?dir=up",
            "/api/payments?per_page=500",
            "/api/payments?sort=nickname",
            "/api/subscriptions?fields=amount",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["code"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_payment_methods() {
        let (status, body) = get_json("/api/payment-methods").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["key"], "cash");
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_health_and_not_found() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dataset"]["payments"], 25);

        let (status, body) = get_json("/api/calls").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[test]
    fn test_build_router_rejects_invalid_dataset() {
        let mut dataset = dataset();
        dataset.payments[0].amount = -1;
        assert!(build_router(Config::default(), dataset).is_err());
    }
}
