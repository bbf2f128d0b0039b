//! Custom extractors for request processing

pub mod grid_params;

pub use grid_params::GridParams;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gamenet_core::types::ErrorResponse;
use std::fmt;

/// Custom error type for extractors and handlers
#[derive(Debug)]
pub struct ExtractorError {
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Error code for API responses
    pub code: String,
    /// Additional context
    pub details: Option<serde_json::Value>,
}

impl ExtractorError {
    /// Create a new extractor error
    pub fn new(message: impl Into<String>, status: StatusCode, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: code.into(),
            details: None,
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, "BAD_REQUEST")
    }

    /// Create an internal server error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
    }

    /// Attach details to the error body
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ExtractorError {}

impl From<gamenet_core::Error> for ExtractorError {
    fn from(err: gamenet_core::Error) -> Self {
        use gamenet_core::Error;

        match &err {
            Error::Validation { field, .. } => {
                Self::new(err.to_string(), StatusCode::BAD_REQUEST, "INVALID_PARAMETERS")
                    .with_details(serde_json::json!({ "field": field }))
            }
            Error::UnknownField { key } => {
                Self::new(err.to_string(), StatusCode::BAD_REQUEST, "UNKNOWN_FIELD")
                    .with_details(serde_json::json!({ "field": key }))
            }
            _ => Self::internal_error(err.to_string()),
        }
    }
}

impl IntoResponse for ExtractorError {
    fn into_response(self) -> Response {
        let response = match self.details {
            Some(details) => ErrorResponse::with_details(self.message, self.code, details),
            None => ErrorResponse::new(self.message, self.code),
        };

        (self.status, Json(response)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_core_error_mapping() {
        let unknown = ExtractorError::from(gamenet_core::Error::UnknownField {
            key: "nickname".to_string(),
        });
        assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
        assert_eq!(unknown.code, "UNKNOWN_FIELD");
        assert_eq!(unknown.details, Some(serde_json::json!({ "field": "nickname" })));

        let invalid = ExtractorError::from(gamenet_core::Error::validation("dir", "bad"));
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code, "INVALID_PARAMETERS");

        let other = ExtractorError::from(gamenet_core::Error::Other("boom".to_string()));
        assert_eq!(other.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ExtractorError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ExtractorError::bad_request("nope").to_string(),
            "BAD_REQUEST: nope"
        );
    }
}
