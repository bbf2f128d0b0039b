//! Data grid pipeline: search, sort and paginate typed records
//!
//! Every evaluation runs the three stages from scratch over the full record
//! set, in that order. Stages never fail: absent values simply do not match
//! and sort last, and a page past the end is empty.

pub mod collation;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod record;
pub mod sort;
pub mod state;

pub use collation::{CollationKey, collate, fold_for_search};
pub use filter::{filter_records, searchable_fields};
pub use paginate::{ELLIPSIS, PageSlot, page_slice, page_window, total_pages};
pub use pipeline::{GridPage, GridQuery, evaluate};
pub use record::{CellFormatter, CellValue, Column, GridField, GridRecord, find_column, is_sortable};
pub use sort::{SortDirection, SortState, sort_records};
pub use state::{GridEvent, GridState};
