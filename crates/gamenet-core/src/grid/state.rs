//! Host-side grid state, mutated only through events

use super::pipeline::GridQuery;
use super::record::{Column, GridRecord, is_sortable};
use super::sort::{SortDirection, SortState};
use tracing::debug;

/// User interaction reported by a grid to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent<F> {
    /// Search box contents changed
    SearchChanged(String),
    /// A column header was clicked
    SortRequested(F),
    /// A page button was clicked
    PageRequested(u32),
}

/// Search, sort and page selection for one mounted grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState<F> {
    search: String,
    search_fields: Option<Vec<F>>,
    sort: Option<SortState<F>>,
    page: u32,
    page_size: u32,
    window_radius: u32,
}

impl<F: Copy + Eq + std::fmt::Debug> GridState<F> {
    /// Fresh state on page 1
    pub const fn new(page_size: u32, window_radius: u32) -> Self {
        Self {
            search: String::new(),
            search_fields: None,
            sort: None,
            page: 1,
            page_size,
            window_radius,
        }
    }

    /// Restrict search to `fields`
    #[must_use]
    pub fn with_search_fields(mut self, fields: Vec<F>) -> Self {
        self.search_fields = Some(fields);
        self
    }

    /// Current search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current sort, if any
    pub const fn sort(&self) -> Option<SortState<F>> {
        self.sort
    }

    /// Current page
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Apply one event
    ///
    /// A search change goes back to page 1. Sorting on the selected field
    /// flips the direction, sorting on another sortable field selects it
    /// ascending, and sorting on an unsortable field does nothing.
    pub fn apply<R>(&mut self, event: GridEvent<F>, columns: &[Column<R>])
    where
        R: GridRecord<Field = F>,
    {
        match event {
            GridEvent::SearchChanged(term) => {
                if term != self.search {
                    self.search = term;
                    self.page = 1;
                }
            }
            GridEvent::SortRequested(field) => {
                if !is_sortable(columns, field) {
                    debug!(?field, "sort requested on unsortable column");
                    return;
                }
                self.sort = Some(match self.sort {
                    Some(current) if current.field == field => SortState {
                        field,
                        direction: current.direction.toggled(),
                    },
                    _ => SortState {
                        field,
                        direction: SortDirection::Ascending,
                    },
                });
            }
            GridEvent::PageRequested(page) => self.page = page,
        }
    }

    /// Pipeline query for the current state
    pub fn to_query(&self) -> GridQuery<F> {
        GridQuery {
            search: self.search.clone(),
            search_fields: self.search_fields.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
            window_radius: self.window_radius,
        }
    }
}
