//! Varmatrix - variable/frequency presence matrix for climate data catalogs
//!
//! Varmatrix reads a set of data catalogs, keeps the datasets of a fixed
//! list of sources, and reports which `(variable, frequency)` pairs each
//! source provides, as a styled HTML table.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog reading and source filtering (collection phase)
//! - `cli`: Command-line interface layer
//! - `config`: `paths.yml` loading and catalog location resolution
//! - `matrix`: Normalization, deduplication and pivoting into the presence matrix
//! - `render`: HTML report rendering and writing
//! - `utils`: Shared utility functions
//!
//! ## Example
//!
//! ```
//! use varmatrix::catalog::SourceRecord;
//! use varmatrix::matrix::{Presence, PresenceKey, build};
//!
//! let matrix = build(&[
//!     SourceRecord::new("ERA5-Land", "(pr,)", "day"),
//!     SourceRecord::new("EMDNA", "pr", "day"),
//!     SourceRecord::new("ERA5-Land", "pr", "day"),
//! ]);
//!
//! assert_eq!(matrix.rows(), &[PresenceKey::new("pr", "day")]);
//! assert_eq!(matrix.columns(), &["EMDNA", "ERA5-Land"]);
//! assert_eq!(
//!     matrix.get(&PresenceKey::new("pr", "day"), "EMDNA"),
//!     Some(Presence::Yes)
//! );
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod matrix;
pub mod render;
pub mod utils;
