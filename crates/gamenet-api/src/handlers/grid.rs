//! Render-ready grid responses shared by every listing

use gamenet_core::grid::{Column, GridField, GridPage, GridQuery, GridRecord, PageSlot, evaluate};
use gamenet_core::types::{Badge, Badged};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column header as sent to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    /// Field key, usable as `sort` and in `fields`
    pub key: &'static str,
    /// Human label
    pub label: &'static str,
    /// Whether clicking the header sorts
    pub sortable: bool,
}

/// One rendered row
#[derive(Debug, Clone, Serialize)]
pub struct GridRow<R> {
    /// The record as stored
    pub record: R,
    /// Formatted text per column key
    pub display: BTreeMap<&'static str, String>,
    /// Status badge
    pub badge: Badge,
}

/// Pagination metadata for the page control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Requested page
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Rows matching the search
    pub total_items: usize,
    /// Number of pages
    pub total_pages: u32,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether an earlier page exists
    pub has_prev: bool,
    /// Page numbers and `"…"` gaps
    pub window: Vec<PageSlot>,
}

impl<R> From<&GridPage<'_, R>> for PaginationInfo {
    fn from(page: &GridPage<'_, R>) -> Self {
        Self {
            page: page.page,
            per_page: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            window: page.page_window.clone(),
        }
    }
}

/// Listing response body
#[derive(Debug, Clone, Serialize)]
pub struct GridResponse<R> {
    /// Column headers, in display order
    pub columns: Vec<ColumnInfo>,
    /// Rows of the requested page
    pub rows: Vec<GridRow<R>>,
    /// Pagination metadata
    pub pagination: PaginationInfo,
}

/// Run the pipeline and render the visible rows
pub fn render_grid<R>(
    records: &[R],
    columns: &[Column<R>],
    query: &GridQuery<R::Field>,
) -> GridResponse<R>
where
    R: GridRecord + Badged + Clone,
{
    let page = evaluate(records, columns, query);

    let rows = page
        .records
        .iter()
        .map(|&record| GridRow {
            record: record.clone(),
            display: columns
                .iter()
                .map(|column| (column.field.key(), column.display(record)))
                .collect(),
            badge: record.badge(),
        })
        .collect();

    GridResponse {
        columns: columns
            .iter()
            .map(|column| ColumnInfo {
                key: column.field.key(),
                label: column.label,
                sortable: column.sortable,
            })
            .collect(),
        rows,
        pagination: PaginationInfo::from(&page),
    }
}
