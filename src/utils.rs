//! Common utility functions shared across the codebase.

/// Checks if a catalog location should be expanded as a glob pattern.
///
/// Only `*` and `?` mark a pattern; square brackets are common in real
/// directory names and are treated literally.
///
/// # Examples
///
/// ```
/// use varmatrix::utils::is_glob_pattern;
///
/// assert!(is_glob_pattern("catalogs/*.json"));
/// assert!(is_glob_pattern("catalogs/era5_?.json"));
/// assert!(!is_glob_pattern("catalogs/[v2]/era5.json"));
/// assert!(!is_glob_pattern("catalogs/era5.json"));
/// ```
pub fn is_glob_pattern(location: &str) -> bool {
    location.contains('*') || location.contains('?')
}

/// Pick the singular or plural form of a noun for a count.
pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
