use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{
    CatalogError, CatalogReader, FREQUENCY_COLUMN, SOURCE_COLUMN, SourceRecord, VARIABLE_COLUMN,
};

/// ESM collection descriptor, as written by intake-esm and xscen.
///
/// Only the fields needed to locate the rows are read; `esmcat_version`,
/// `attributes`, `assets` and friends are ignored.
#[derive(Debug, Deserialize)]
struct EsmCollection {
    #[serde(default)]
    catalog_file: Option<String>,
    #[serde(default)]
    catalog_dict: Option<Vec<Map<String, Value>>>,
}

/// Reads catalogs stored on the local filesystem.
///
/// - `*.csv`: the catalog table itself
/// - anything else: an ESM collection JSON whose `catalog_file` points at the
///   table (relative to the JSON file), or whose `catalog_dict` inlines it
#[derive(Debug, Clone, Copy, Default)]
pub struct EsmCatalogReader;

impl EsmCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogReader for EsmCatalogReader {
    fn query(&self, location: &Path) -> Result<Vec<SourceRecord>, CatalogError> {
        if is_csv(location) {
            read_csv_file(location)
        } else {
            read_collection(location)
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_collection(location: &Path) -> Result<Vec<SourceRecord>, CatalogError> {
    let content = fs::read_to_string(location).map_err(|source| CatalogError::Open {
        location: location.to_path_buf(),
        source,
    })?;
    let collection: EsmCollection =
        serde_json::from_str(&content).map_err(|e| CatalogError::parse(location, e))?;

    if let Some(rows) = collection.catalog_dict {
        return records_from_dict(location, &rows);
    }

    match collection.catalog_file {
        Some(file) => read_csv_file(&resolve_catalog_file(location, &file)),
        None => Err(CatalogError::parse(
            location,
            "collection has neither 'catalog_file' nor 'catalog_dict'",
        )),
    }
}

/// Resolve `catalog_file` against the directory of the collection JSON.
fn resolve_catalog_file(location: &Path, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match location.parent() {
        Some(parent) => parent.join(file),
        None => file.to_path_buf(),
    }
}

fn read_csv_file(path: &Path) -> Result<Vec<SourceRecord>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        location: path.to_path_buf(),
        source,
    })?;
    read_table(file, path)
}

/// Read a catalog table from any reader.
///
/// The header must name the `source`, `variable` and `frequency` columns;
/// all other columns are skipped. Empty cells become empty strings, and a
/// leading byte-order mark on the header is ignored.
pub(crate) fn read_table<R: Read>(
    reader: R,
    location: &Path,
) -> Result<Vec<SourceRecord>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| CatalogError::parse(location, e))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
            .ok_or_else(|| CatalogError::MissingColumn {
                location: location.to_path_buf(),
                column: name.to_string(),
            })
    };
    let source_idx = column(SOURCE_COLUMN)?;
    let variable_idx = column(VARIABLE_COLUMN)?;
    let frequency_idx = column(FREQUENCY_COLUMN)?;

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result.map_err(|e| {
            CatalogError::parse(location, format!("record {}: {}", idx + 1, e))
        })?;
        let field = |i: usize| row.get(i).unwrap_or("").to_string();
        records.push(SourceRecord {
            source: field(source_idx),
            variable: field(variable_idx),
            frequency: field(frequency_idx),
        });
    }
    Ok(records)
}

fn records_from_dict(
    location: &Path,
    rows: &[Map<String, Value>],
) -> Result<Vec<SourceRecord>, CatalogError> {
    for name in [SOURCE_COLUMN, VARIABLE_COLUMN, FREQUENCY_COLUMN] {
        if !rows.is_empty() && !rows.iter().any(|row| row.contains_key(name)) {
            return Err(CatalogError::MissingColumn {
                location: location.to_path_buf(),
                column: name.to_string(),
            });
        }
    }

    Ok(rows
        .iter()
        .map(|row| SourceRecord {
            source: cell_text(row.get(SOURCE_COLUMN)),
            variable: cell_text(row.get(VARIABLE_COLUMN)),
            frequency: cell_text(row.get(FREQUENCY_COLUMN)),
        })
        .collect())
}

/// Render an inline catalog cell the way it would appear in the CSV form.
///
/// Arrays keep their JSON text (e.g. `["pr"]`); normalization picks the
/// first token out of it later.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
