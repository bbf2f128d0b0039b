//! Pagination stage and the compressed page window
//!
//! Pages are 1-based. A page past the end is not an error, it is simply
//! empty. The window always shows the first and last page plus `radius`
//! pages around the current one; wider gaps collapse to [`PageSlot::Ellipsis`].

use serde::{Serialize, Serializer};

/// Placeholder text rendered for a gap in the page window
pub const ELLIPSIS: &str = "…";

/// One entry of the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number (1-based)
    Page(u32),
    /// A gap of one or more hidden pages
    Ellipsis,
}

impl Serialize for PageSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u32(*page),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Number of pages needed for `total_items`; zero for an empty set
pub fn total_pages(total_items: usize, page_size: u32) -> u32 {
    if page_size == 0 || total_items == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(page_size as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The records of one page
///
/// Positions `[(page-1)*size, page*size)` clipped to the input. Page `0`, a
/// zero page size or a page past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let size = page_size as usize;
    let start = (page as usize - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Compressed list of pages to offer around `current`
///
/// Page 1 and the last page are always present, so is the run
/// `current ± radius`. An ellipsis stands in wherever the run and an edge are
/// more than one page apart. `current` is clamped into `[1, total_pages]`
/// for this purpose only.
pub fn page_window(current: u32, total_pages: u32, radius: u32) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total_pages.saturating_sub(1));

    let mut window = vec![PageSlot::Page(1)];
    let mut last = 1;
    for page in start..=end {
        if page > last + 1 {
            window.push(PageSlot::Ellipsis);
        }
        window.push(PageSlot::Page(page));
        last = page;
    }
    if total_pages > 1 {
        if total_pages > last + 1 {
            window.push(PageSlot::Ellipsis);
        }
        window.push(PageSlot::Page(total_pages));
    }
    window
}
