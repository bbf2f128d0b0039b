//! Grid state carried in query parameters

use crate::extractors::ExtractorError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use gamenet_core::config::GridConfig;
use gamenet_core::grid::{GridField, GridQuery, SortDirection, SortState};
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

/// Search, sort and page parameters of a grid listing
///
/// `GET /api/payments?search=علی&fields=customer_name&sort=amount&dir=desc&page=2&per_page=20`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GridParams {
    /// Search term
    #[validate(length(max = 200))]
    pub search: Option<String>,

    /// Comma-separated field keys to search in
    #[validate(length(max = 500))]
    pub fields: Option<String>,

    /// Field key to sort by
    #[validate(length(min = 1, max = 64))]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[validate(custom(function = "validate_sort_direction"))]
    pub dir: Option<String>,

    /// Page number (1-based)
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    /// Number of rows per page
    #[validate(range(min = 1))]
    pub per_page: Option<u32>,
}

impl GridParams {
    /// Resolve the parameters into a pipeline query
    ///
    /// # Errors
    ///
    /// Returns a bad request error for an unknown field key, an invalid
    /// direction, or a page size above the configured maximum.
    pub fn to_query<F: GridField>(&self, grid: &GridConfig) -> Result<GridQuery<F>, ExtractorError> {
        let page_size = self.per_page.unwrap_or(grid.default_page_size);
        if page_size > grid.max_page_size {
            return Err(gamenet_core::Error::validation(
                "per_page",
                format!("must not exceed {}", grid.max_page_size),
            )
            .into());
        }

        let search_fields = match self.fields.as_deref() {
            Some(fields) => {
                let parsed = fields
                    .split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(parse_field::<F>)
                    .collect::<Result<Vec<_>, _>>()?;
                (!parsed.is_empty()).then_some(parsed)
            }
            None => None,
        };

        let direction = self
            .dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();
        let sort = self
            .sort
            .as_deref()
            .map(parse_field::<F>)
            .transpose()?
            .map(|field| SortState { field, direction });

        Ok(GridQuery {
            search: self.search.clone().unwrap_or_default(),
            search_fields,
            sort,
            page: self.page.unwrap_or(1),
            page_size,
            window_radius: grid.page_window_radius,
        })
    }
}

fn parse_field<F: GridField>(key: &str) -> Result<F, ExtractorError> {
    F::from_key(key).ok_or_else(|| {
        gamenet_core::Error::UnknownField {
            key: key.to_string(),
        }
        .into()
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for GridParams
where
    S: Send + Sync,
{
    type Rejection = ExtractorError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let params: Self = serde_urlencoded::from_str(query).map_err(|e| {
            ExtractorError::bad_request(format!("Invalid grid parameters: {e}"))
        })?;

        if let Err(validation_errors) = params.validate() {
            warn!("Invalid grid parameters: {:?}", validation_errors);
            return Err(ExtractorError::new(
                "Invalid query parameters",
                axum::http::StatusCode::BAD_REQUEST,
                "INVALID_PARAMETERS",
            )
            .with_details(serde_json::json!(validation_errors)));
        }

        Ok(params)
    }
}

/// Custom validator for sort direction
fn validate_sort_direction(dir: &str) -> Result<(), validator::ValidationError> {
    match dir {
        "asc" | "desc" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_sort_direction")),
    }
}
