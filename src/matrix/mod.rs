//! Presence matrix construction.
//!
//! Turns the flat list of catalog records into a dense table:
//! rows are `(variable, frequency)` pairs, columns are sources, and every
//! cell says whether that source lists that pair.
//!
//! ## Pipeline
//!
//! 1. **Normalize**: reduce the raw variable field to its first token
//! 2. **Deduplicate**: one presence fact per `(variable, frequency, source)`
//! 3. **Pivot**: sorted keys × sorted sources, every cell materialized

mod normalize;
mod pivot;

use std::fmt;

pub use normalize::normalize_variable;
pub use pivot::{BuildOutcome, MalformedReason, MalformedRecord, build, build_with_diagnostics};

/// Row identity of the matrix.
///
/// Ordering is lexicographic on `variable`, then `frequency`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresenceKey {
    pub variable: String,
    pub frequency: String,
}

impl PresenceKey {
    pub fn new(variable: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            frequency: frequency.into(),
        }
    }
}

impl fmt::Display for PresenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.variable, self.frequency)
    }
}

/// Cell value of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    Yes,
    #[default]
    No,
}

impl Presence {
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Yes => "Yes",
            Presence::No => "No",
        }
    }

    pub fn is_present(self) -> bool {
        self == Presence::Yes
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dense source × `(variable, frequency)` table.
///
/// Rows are sorted by [`PresenceKey`], columns by source name, and the grid
/// always holds `rows × columns` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceMatrix {
    rows: Vec<PresenceKey>,
    columns: Vec<String>,
    /// Row-major, `rows.len() * columns.len()` entries.
    cells: Vec<Presence>,
}

impl PresenceMatrix {
    /// Assemble a matrix from already sorted, distinct axes and a full grid.
    pub(crate) fn from_parts(
        rows: Vec<PresenceKey>,
        columns: Vec<String>,
        cells: Vec<Presence>,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows.len() * columns.len());
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(columns.windows(2).all(|w| w[0] < w[1]));
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[PresenceKey] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the matrix has no rows (and therefore no columns).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell by position. `None` if either index is out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<Presence> {
        if row >= self.rows.len() || column >= self.columns.len() {
            return None;
        }
        self.cells.get(row * self.columns.len() + column).copied()
    }

    /// Cell by labels. `None` if the key is not a row or the source not a column.
    pub fn get(&self, key: &PresenceKey, source: &str) -> Option<Presence> {
        let row = self.rows.binary_search(key).ok()?;
        let column = self
            .columns
            .binary_search_by(|c| c.as_str().cmp(source))
            .ok()?;
        self.cell(row, column)
    }

    /// All cells of one row, in column order.
    pub fn row_cells(&self, row: usize) -> &[Presence] {
        let width = self.columns.len();
        let start = (row * width).min(self.cells.len());
        let end = (start + width).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Iterate rows in order together with their cells.
    pub fn iter(&self) -> impl Iterator<Item = (&PresenceKey, &[Presence])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, key)| (key, self.row_cells(i)))
    }
}
