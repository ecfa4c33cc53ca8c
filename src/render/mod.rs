//! HTML report rendering.
//!
//! The renderer only reads cell values by (row, column); it has no say in
//! how the matrix is built.

mod html;
mod style;

use std::{
    fmt, fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

pub use html::{escape, render_html};
pub use style::{CellStyle, StyleRule, TABLE_STYLES, stylesheet};

use crate::matrix::PresenceMatrix;

/// Default report file name.
pub const DEFAULT_OUTPUT: &str = "variables_by_source.html";

/// Document title of the report.
pub const REPORT_TITLE: &str = "Variables by source";

/// The report file could not be written.
#[derive(Debug)]
pub struct RenderError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to write report {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Render the matrix and write it to `path`.
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so `path` either keeps its old content or holds the complete
/// new report. Missing parent directories are created.
pub fn write_report(matrix: &PresenceMatrix, path: &Path) -> Result<(), RenderError> {
    let html = render_html(matrix, REPORT_TITLE);
    write_atomic(path, html.as_bytes()).map_err(|source| RenderError {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    set_report_permissions(tmp.as_file(), path)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Temp files are created owner-only; give the report the mode of the file
/// it replaces, or 0644 for a new one.
#[cfg(unix)]
fn set_report_permissions(file: &fs::File, path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(existing) if existing.is_file() => existing.permissions(),
        _ => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_report_permissions(_file: &fs::File, _path: &Path) -> io::Result<()> {
    Ok(())
}
