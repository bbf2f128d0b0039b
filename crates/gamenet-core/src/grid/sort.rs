//! Sort stage: single-key, stable, absent values last

use super::collation::CollationKey;
use super::record::GridRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short form used in query strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(crate::Error::validation(
                "dir",
                format!("expected 'asc' or 'desc', got '{other}'"),
            )),
        }
    }
}

/// Selected sort field and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    /// Field to sort by
    pub field: F,
    /// Direction
    pub direction: SortDirection,
}

impl<F> SortState<F> {
    /// Ascending on `field`
    pub const fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending on `field`
    pub const fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Order `records` by one field
///
/// Returns a new sequence; the input is left as is. With no sort state the
/// input order is kept. Absent values come after present ones in both
/// directions; equal values keep their relative order.
pub fn sort_records<'a, R: GridRecord>(
    records: &[&'a R],
    sort: Option<SortState<R::Field>>,
) -> Vec<&'a R> {
    let Some(sort) = sort else {
        return records.to_vec();
    };

    let mut keyed: Vec<(Option<CollationKey>, &'a R)> = records
        .iter()
        .map(|&record| {
            let key = record
                .cell(sort.field)
                .map(|value| CollationKey::new(&value.to_text()));
            (key, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => sort.direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::grid::record::testing::{Row, RowField};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn names<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("c", Some(120_000), None),
            Row::new("a", None, None),
            Row::new("b", Some(30_000), None),
            Row::new("d", Some(30_000), None),
            Row::new("e", None, None),
        ]
    }

    #[test]
    fn test_no_sort_keeps_input_order() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        assert_eq!(sort_records(&refs, None), refs);
    }

    #[test]
    fn test_amounts_sort_numerically_not_lexicographically() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let sorted = sort_records(&refs, Some(SortState::ascending(RowField::Amount)));
        assert_eq!(names(&sorted), vec!["b", "d", "c", "a", "e"]);
    }

    #[test]
    fn test_absent_values_last_in_both_directions() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let sorted = sort_records(&refs, Some(SortState::descending(RowField::Amount)));
        // ties (b, d) keep their filtered order, absent (a, e) trail
        assert_eq!(names(&sorted), vec!["c", "b", "d", "a", "e"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let before = refs.clone();
        let _ = sort_records(&refs, Some(SortState::descending(RowField::Name)));
        assert_eq!(refs, before);
    }

    #[test]
    fn test_direction_parsing_and_toggle() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("DESC".parse::<SortDirection>().is_err());
        assert!("ascending".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(serde_json::to_string(&SortDirection::Descending).unwrap(), "\"desc\"");
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        proptest::collection::vec(
            ("[a-z]{0,6}", proptest::option::of(0i64..1_000_000)),
            0..40,
        )
        .prop_map(|items| {
            items
                .into_iter()
                .map(|(name, amount)| Row::new(&name, amount, None))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_sort_is_idempotent(rows in arb_rows(), desc in any::<bool>()) {
            let refs: Vec<&Row> = rows.iter().collect();
            let sort = if desc {
                SortState::descending(RowField::Amount)
            } else {
                SortState::ascending(RowField::Amount)
            };
            let once = sort_records(&refs, Some(sort));
            let twice = sort_records(&once, Some(sort));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_nulls_always_trail(rows in arb_rows(), desc in any::<bool>()) {
            let refs: Vec<&Row> = rows.iter().collect();
            let sort = if desc {
                SortState::descending(RowField::Amount)
            } else {
                SortState::ascending(RowField::Amount)
            };
            let sorted = sort_records(&refs, Some(sort));
            let first_absent = sorted.iter().position(|r| r.amount.is_none()).unwrap_or(sorted.len());
            prop_assert!(sorted[first_absent..].iter().all(|r| r.amount.is_none()));
        }

        #[test]
        fn test_direction_flip_reverses_distinct_values(
            amounts in proptest::collection::hash_set(0i64..1_000_000, 0..40),
        ) {
            let rows: Vec<Row> = amounts.iter().map(|&a| Row::new("x", Some(a), None)).collect();
            let refs: Vec<&Row> = rows.iter().collect();
            let asc = sort_records(&refs, Some(SortState::ascending(RowField::Amount)));
            let mut desc = sort_records(&refs, Some(SortState::descending(RowField::Amount)));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }
    }
}
