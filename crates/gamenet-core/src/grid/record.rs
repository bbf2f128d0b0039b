//! Typed records, field keys and column descriptors
//!
//! A record type exposes its fields through [`GridRecord::cell`], keyed by a
//! small `Copy` enum implementing [`GridField`]. Cells carry the stored value:
//! searching and sorting work on it directly, while anything shown to a user
//! goes through the column's [`CellFormatter`].
//!
//! ```
//! use gamenet_core::grid::GridField;
//! use gamenet_core::types::{Payment, PaymentField};
//!
//! let columns = Payment::columns();
//! assert_eq!(columns[0].field.key(), "id");
//! assert_eq!(PaymentField::from_key("amount"), Some(PaymentField::Amount));
//! ```

use chrono::NaiveDate;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A single cell value as seen by the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// Free text
    Text(Cow<'a, str>),
    /// Whole number (amounts, counters, ids)
    Number(i64),
    /// Calendar date
    Date(NaiveDate),
}

impl<'a> CellValue<'a> {
    /// Borrowed text cell
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Text coercion used for searching and sorting
    ///
    /// Dates coerce to ISO `YYYY-MM-DD`, which keeps them ordered under the
    /// numeric-aware collation.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_ref()),
            Self::Number(value) => Cow::Owned(value.to_string()),
            Self::Date(value) => Cow::Owned(value.format("%Y-%m-%d").to_string()),
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Field key enum of a record type
pub trait GridField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Stable string key, used in query strings and JSON
    fn key(self) -> &'static str;

    /// Every field, in declaration order
    fn all() -> &'static [Self];

    /// Reverse of [`GridField::key`]
    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.key() == key)
    }
}

/// A row the grid can search, sort and page through
pub trait GridRecord {
    /// Field key enum for this record type
    type Field: GridField;

    /// Value of one field, `None` when absent
    fn cell(&self, field: Self::Field) -> Option<CellValue<'_>>;
}

/// Display formatting strategy for one column
pub trait CellFormatter<R>: Send + Sync {
    /// Turn a cell value into its render-ready text
    fn format(&self, value: Option<&CellValue<'_>>, record: &R) -> String;
}

/// Column descriptor: which field, how it is labelled, whether it sorts
pub struct Column<R: GridRecord> {
    /// Field shown in this column
    pub field: R::Field,
    /// Human label
    pub label: &'static str,
    /// Whether the column may be selected as the sort key
    pub sortable: bool,
    formatter: Option<Arc<dyn CellFormatter<R>>>,
}

impl<R: GridRecord> Column<R> {
    /// Sortable column with the default text formatting
    pub fn new(field: R::Field, label: &'static str) -> Self {
        Self {
            field,
            label,
            sortable: true,
            formatter: None,
        }
    }

    /// Mark the column as not sortable
    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Attach a formatting strategy
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: CellFormatter<R> + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Render-ready text for this column of `record`
    pub fn display(&self, record: &R) -> String {
        let value = record.cell(self.field);
        match &self.formatter {
            Some(formatter) => formatter.format(value.as_ref(), record),
            None => value.map(|v| v.to_text().into_owned()).unwrap_or_default(),
        }
    }
}

impl<R: GridRecord> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            label: self.label,
            sortable: self.sortable,
            formatter: self.formatter.clone(),
        }
    }
}

impl<R: GridRecord> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("formatted", &self.formatter.is_some())
            .finish()
    }
}

/// Look up the column showing `field`
pub fn find_column<R: GridRecord>(columns: &[Column<R>], field: R::Field) -> Option<&Column<R>> {
    columns.iter().find(|column| column.field == field)
}

/// Whether `field` belongs to a sortable column
pub fn is_sortable<R: GridRecord>(columns: &[Column<R>], field: R::Field) -> bool {
    find_column(columns, field).is_some_and(|column| column.sortable)
}

#[cfg(test)]
pub(crate) mod testing {
    //! A small record type shared by the grid unit tests

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum RowField {
        Name,
        Amount,
        Note,
    }

    impl GridField for RowField {
        fn key(self) -> &'static str {
            match self {
                Self::Name => "name",
                Self::Amount => "amount",
                Self::Note => "note",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Name, Self::Amount, Self::Note]
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Row {
        pub(crate) name: String,
        pub(crate) amount: Option<i64>,
        pub(crate) note: Option<String>,
    }

    impl Row {
        pub(crate) fn new(name: &str, amount: Option<i64>, note: Option<&str>) -> Self {
            Self {
                name: name.to_string(),
                amount,
                note: note.map(str::to_string),
            }
        }
    }

    impl GridRecord for Row {
        type Field = RowField;

        fn cell(&self, field: RowField) -> Option<CellValue<'_>> {
            match field {
                RowField::Name => Some(CellValue::text(&self.name)),
                RowField::Amount => self.amount.map(CellValue::Number),
                RowField::Note => self.note.as_deref().map(CellValue::text),
            }
        }
    }

    pub(crate) fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new(RowField::Name, "Name"),
            Column::new(RowField::Amount, "Amount"),
            Column::new(RowField::Note, "Note").unsortable(),
        ]
    }
}
