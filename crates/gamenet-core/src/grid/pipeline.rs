//! Filter, sort, paginate in one pass

use super::filter::{filter_records, searchable_fields};
use super::paginate::{PageSlot, page_slice, page_window, total_pages};
use super::record::{Column, GridRecord, is_sortable};
use super::sort::{SortState, sort_records};
use tracing::debug;

/// Everything the pipeline needs besides the records and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery<F> {
    /// Search term; empty disables filtering
    pub search: String,
    /// Fields the search looks at; `None` means every column
    pub search_fields: Option<Vec<F>>,
    /// Selected sort, if any
    pub sort: Option<SortState<F>>,
    /// Requested page, 1-based
    pub page: u32,
    /// Rows per page
    pub page_size: u32,
    /// Pages shown each side of the current one in the window
    pub window_radius: u32,
}

impl<F> GridQuery<F> {
    /// First page, no search, no sort
    pub const fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            search_fields: None,
            sort: None,
            page: 1,
            page_size,
            window_radius: 2,
        }
    }
}

/// Output of one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPage<'a, R> {
    /// Rows of the requested page, in display order
    pub records: Vec<&'a R>,
    /// Rows left after filtering, before slicing
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, zero when nothing matched
    pub total_pages: u32,
    /// Requested page, echoed back unclamped
    pub page: u32,
    /// Rows per page
    pub page_size: u32,
    /// Compressed page list for the pagination control
    pub page_window: Vec<PageSlot>,
}

impl<R> GridPage<'_, R> {
    /// Whether a later page exists
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists
    pub const fn has_prev(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Run search, sort and pagination over `records`
///
/// Stages always run in that order and from scratch. A sort on an unsortable
/// column is ignored. The page number is not clamped: a page past the end
/// returns no rows.
pub fn evaluate<'a, R: GridRecord>(
    records: &'a [R],
    columns: &[Column<R>],
    query: &GridQuery<R::Field>,
) -> GridPage<'a, R> {
    let fields = searchable_fields(columns, query.search_fields.as_deref());
    let filtered = filter_records(records, &query.search, &fields);

    let sort = query.sort.filter(|sort| {
        let sortable = is_sortable(columns, sort.field);
        if !sortable {
            debug!(field = ?sort.field, "ignoring sort on unsortable column");
        }
        sortable
    });
    let sorted = sort_records(&filtered, sort);

    let total_items = sorted.len();
    let total_pages = total_pages(total_items, query.page_size);
    let visible = page_slice(&sorted, query.page, query.page_size).to_vec();

    debug!(
        total = records.len(),
        matched = total_items,
        page = query.page,
        visible = visible.len(),
        "grid evaluated"
    );

    GridPage {
        records: visible,
        total_items,
        total_pages,
        page: query.page,
        page_size: query.page_size,
        page_window: page_window(query.page, total_pages, query.window_radius),
    }
}
