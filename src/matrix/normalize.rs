use std::sync::LazyLock;

use regex::Regex;

/// First run of ASCII letters, digits or underscores.
///
/// Catalogs written from Python tuples store single variables as `(pr,)` or
/// `('pr',)`; the first token is the variable name.
static VARIABLE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Extract the canonical variable name from a raw catalog value.
///
/// Returns `None` when the value contains no token at all (e.g. `"???"` or
/// an empty cell); such records cannot form a matrix row.
///
/// Multi-variable values such as `(pr, tas)` normalize to their first
/// variable only.
///
/// # Examples
///
/// ```
/// use varmatrix::matrix::normalize_variable;
///
/// assert_eq!(normalize_variable("(pr,)"), Some("pr"));
/// assert_eq!(normalize_variable("('tasmax',)"), Some("tasmax"));
/// assert_eq!(normalize_variable("pr"), Some("pr"));
/// assert_eq!(normalize_variable("???"), None);
/// ```
pub fn normalize_variable(raw: &str) -> Option<&str> {
    VARIABLE_TOKEN_REGEX.find(raw).map(|m| m.as_str())
}
