use std::{fmt, io, path::PathBuf};

/// Errors raised while opening or reading a catalog location.
///
/// Every variant is fatal for a run: a catalog that cannot be read means the
/// presence matrix would be incomplete.
#[derive(Debug)]
pub enum CatalogError {
    /// The location (or the CSV it points to) could not be opened or read.
    Open { location: PathBuf, source: io::Error },
    /// The catalog content is not a valid collection or table.
    Parse { location: PathBuf, message: String },
    /// The catalog table has no column with the given name.
    MissingColumn { location: PathBuf, column: String },
}

impl CatalogError {
    pub fn location(&self) -> &PathBuf {
        match self {
            CatalogError::Open { location, .. }
            | CatalogError::Parse { location, .. }
            | CatalogError::MissingColumn { location, .. } => location,
        }
    }

    pub(crate) fn parse(location: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        CatalogError::Parse {
            location: location.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Open { location, source } => {
                write!(f, "Failed to open catalog {}: {}", location.display(), source)
            }
            CatalogError::Parse { location, message } => {
                write!(f, "Failed to parse catalog {}: {}", location.display(), message)
            }
            CatalogError::MissingColumn { location, column } => write!(
                f,
                "Catalog {} has no '{}' column",
                location.display(),
                column
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}
