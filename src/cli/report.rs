//! Console output for command results.
//!
//! Kept separate from the core so varmatrix can be used as a library
//! without printing side effects.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{BuildSummary, CommandResult, CommandSummary, InitSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    matrix::{Presence, PresenceMatrix},
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between matrix columns.
const COLUMN_GAP: &str = "  ";

pub fn print(result: &CommandResult, verbose: bool, quiet: bool) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, quiet),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_build(summary: &BuildSummary, verbose: bool, quiet: bool) {
    if verbose {
        print_diagnostics_to(summary, &mut io::stderr().lock());
    }

    let mut stdout = io::stdout().lock();
    if !quiet {
        print_matrix_to(&summary.matrix, &mut stdout);
    }
    print_success_to(summary, &mut stdout);
}

/// Per-catalog row counts and dropped records.
fn print_diagnostics_to<W: Write>(summary: &BuildSummary, writer: &mut W) {
    for stats in &summary.catalogs {
        let _ = writeln!(
            writer,
            "  {} {} of {} {} kept",
            format!("{}:", stats.location.display()).cyan(),
            stats.rows_kept,
            stats.rows_read,
            plural(stats.rows_read, "row", "rows")
        );
    }

    for dropped in &summary.malformed {
        let record = &dropped.record;
        let _ = writeln!(
            writer,
            "{} skipped {} record (variable {:?}, frequency {:?}): {}",
            "warning:".bold().yellow(),
            record.source,
            record.variable,
            record.frequency,
            dropped.reason
        );
    }
}

/// Print the matrix as an aligned text table.
///
/// The first two columns are the `variable` and `frequency` row labels,
/// followed by one column per source.
pub fn print_matrix_to<W: Write>(matrix: &PresenceMatrix, writer: &mut W) {
    if matrix.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            "No records from the configured sources; the matrix is empty.".dimmed()
        );
        return;
    }

    let mut headers = vec!["variable".to_string(), "frequency".to_string()];
    headers.extend(matrix.columns().iter().cloned());

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for key in matrix.rows() {
        widths[0] = widths[0].max(key.variable.width());
        widths[1] = widths[1].max(key.frequency.width());
    }
    // Cells are "Yes"/"No", narrower than any header except very short sources
    for width in widths.iter_mut().skip(2) {
        *width = (*width).max(Presence::Yes.as_str().len());
    }

    let header_line: Vec<ColoredString> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).bold())
        .collect();
    write_row(writer, &header_line);

    for (key, cells) in matrix.iter() {
        let mut line = vec![
            pad(&key.variable, widths[0]).normal(),
            pad(&key.frequency, widths[1]).normal(),
        ];
        for (cell, width) in cells.iter().zip(widths.iter().skip(2)) {
            let text = pad(cell.as_str(), *width);
            line.push(match cell {
                Presence::Yes => text.green(),
                Presence::No => text.red(),
            });
        }
        write_row(writer, &line);
    }
}

fn write_row<W: Write>(writer: &mut W, cells: &[ColoredString]) {
    let line = cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let _ = writeln!(writer, "{}", line.trim_end());
}

/// Left-align `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn print_success_to<W: Write>(summary: &BuildSummary, writer: &mut W) {
    let rows = summary.matrix.row_count();
    let columns = summary.matrix.column_count();
    let catalogs = summary.catalogs.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} {} × {} {} from {} {})",
            summary.output.display(),
            rows,
            plural(rows, "row", "rows"),
            columns,
            plural(columns, "source", "sources"),
            catalogs,
            plural(catalogs, "catalog", "catalogs")
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
