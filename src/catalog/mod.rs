//! Catalog access and source collection.
//!
//! A catalog is an opaque location (usually an ESM collection JSON or a CSV
//! table) that lists datasets with at least `source`, `variable` and
//! `frequency` columns. This module reads those rows and filters them down to
//! the sources we report on.
//!
//! ## Module Structure
//!
//! - `error`: `CatalogError`, the typed failure for unreadable catalogs
//! - `esm`: `EsmCatalogReader`, the on-disk reader for ESM collections and CSV tables
//! - `collect`: the collector that queries every location and applies the source filter

mod collect;
mod error;
mod esm;

use std::path::Path;

pub use collect::{CatalogStats, Collection, collect};
pub use error::CatalogError;
pub use esm::EsmCatalogReader;

/// Column holding the dataset source (e.g. `ERA5-Land`).
pub const SOURCE_COLUMN: &str = "source";
/// Column holding the variable name, possibly rendered as a tuple like `(pr,)`.
pub const VARIABLE_COLUMN: &str = "variable";
/// Column holding the sampling frequency (e.g. `day`, `1hr`).
pub const FREQUENCY_COLUMN: &str = "frequency";

/// One dataset row as listed by a catalog.
///
/// The `variable` field is kept exactly as the catalog stores it; it is only
/// normalized when the presence matrix is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceRecord {
    pub source: String,
    pub variable: String,
    pub frequency: String,
}

impl SourceRecord {
    pub fn new(
        source: impl Into<String>,
        variable: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            variable: variable.into(),
            frequency: frequency.into(),
        }
    }
}

/// Reads every row of a catalog.
///
/// Implementations must either return all rows of the location or fail;
/// a partial listing would silently produce a misleading matrix.
pub trait CatalogReader: Sync {
    fn query(&self, location: &Path) -> Result<Vec<SourceRecord>, CatalogError>;
}
