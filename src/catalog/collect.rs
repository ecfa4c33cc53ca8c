use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::{CatalogError, CatalogReader, SourceRecord};

/// Row counts for a single catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub location: PathBuf,
    /// Rows listed by the catalog.
    pub rows_read: usize,
    /// Rows whose source is one of the sources of interest.
    pub rows_kept: usize,
}

/// Records gathered from every catalog location, filtered by source.
#[derive(Debug, Default)]
pub struct Collection {
    pub records: Vec<SourceRecord>,
    /// One entry per location, in the order the locations were given.
    pub stats: Vec<CatalogStats>,
}

/// Query every catalog location and keep the rows from sources of interest.
///
/// Locations are read in parallel, but nothing is returned until all of them
/// have finished. Any unreadable location fails the whole collection; when
/// several fail, the error of the first one in `locations` order is returned.
///
/// A catalog with no matching rows is not an error; it simply contributes
/// nothing.
pub fn collect<R, S>(
    locations: &[PathBuf],
    sources_of_interest: &[S],
    reader: &R,
) -> Result<Collection, CatalogError>
where
    R: CatalogReader + ?Sized,
    S: AsRef<str>,
{
    let wanted: HashSet<&str> = sources_of_interest.iter().map(|s| s.as_ref()).collect();

    // Parallel queries
    let results: Vec<_> = locations
        .par_iter()
        .map(|location| query_filtered(reader, location, &wanted))
        .collect();

    // Sequential merge, in location order
    let mut collection = Collection::default();
    for result in results {
        let (stats, mut records) = result?;
        collection.records.append(&mut records);
        collection.stats.push(stats);
    }
    Ok(collection)
}

fn query_filtered<R>(
    reader: &R,
    location: &Path,
    wanted: &HashSet<&str>,
) -> Result<(CatalogStats, Vec<SourceRecord>), CatalogError>
where
    R: CatalogReader + ?Sized,
{
    let rows = reader.query(location)?;
    let rows_read = rows.len();
    let kept: Vec<SourceRecord> = rows
        .into_iter()
        .filter(|row| wanted.contains(row.source.as_str()))
        .collect();

    Ok((
        CatalogStats {
            location: location.to_path_buf(),
            rows_read,
            rows_kept: kept.len(),
        },
        kept,
    ))
}
