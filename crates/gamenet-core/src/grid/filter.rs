//! Search stage: case-insensitive substring match over searchable fields

use super::collation::fold_for_search;
use super::record::{Column, GridRecord};

/// Resolve which fields a search looks at
///
/// An explicit list wins; otherwise every column's field is searched.
pub fn searchable_fields<R: GridRecord>(
    columns: &[Column<R>],
    explicit: Option<&[R::Field]>,
) -> Vec<R::Field> {
    explicit.map_or_else(
        || columns.iter().map(|column| column.field).collect(),
        |fields| fields.to_vec(),
    )
}

/// Keep the records where at least one of `fields` contains `term`
///
/// An empty term keeps everything. Absent values never match. Original order
/// is preserved and `records` is not modified.
pub fn filter_records<'a, R: GridRecord>(
    records: &'a [R],
    term: &str,
    fields: &[R::Field],
) -> Vec<&'a R> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = fold_for_search(term);
    records
        .iter()
        .filter(|record| {
            fields.iter().any(|&field| {
                record
                    .cell(field)
                    .is_some_and(|value| fold_for_search(&value.to_text()).contains(&needle))
            })
        })
        .collect()
}
