use std::fmt::Write;

use super::style::{CellStyle, stylesheet};
use crate::matrix::PresenceMatrix;

/// Label of the column axis (the corner above the row headers).
const COLUMN_AXIS_NAME: &str = "source";
/// Labels of the two row-index levels.
const ROW_AXIS_NAMES: [&str; 2] = ["variable", "frequency"];

/// Serialize the matrix as a standalone HTML document.
///
/// Layout follows the usual two-level row index rendering: the variable
/// header spans all consecutive rows that share it, the frequency header
/// sits next to it, and each source is one column. Cell backgrounds come
/// from [`CellStyle::for_value`].
pub fn render_html(matrix: &PresenceMatrix, title: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(out, "<style>\n{}\n</style>", stylesheet());
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<table>");

    write_header(&mut out, matrix);
    write_body(&mut out, matrix);

    let _ = writeln!(out, "</table>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn write_header(out: &mut String, matrix: &PresenceMatrix) {
    let _ = writeln!(out, "  <thead>");

    // Source names
    let _ = write!(
        out,
        "    <tr><th class=\"blank\"></th><th class=\"index_name\">{}</th>",
        COLUMN_AXIS_NAME
    );
    for source in matrix.columns() {
        let _ = write!(out, "<th class=\"col_heading\">{}</th>", escape(source));
    }
    let _ = writeln!(out, "</tr>");

    // Index level names
    let _ = write!(out, "    <tr>");
    for name in ROW_AXIS_NAMES {
        let _ = write!(out, "<th class=\"index_name\">{}</th>", name);
    }
    for _ in matrix.columns() {
        let _ = write!(out, "<th class=\"blank\"></th>");
    }
    let _ = writeln!(out, "</tr>");

    let _ = writeln!(out, "  </thead>");
}

fn write_body(out: &mut String, matrix: &PresenceMatrix) {
    let rows = matrix.rows();
    let _ = writeln!(out, "  <tbody>");

    for (i, (key, cells)) in matrix.iter().enumerate() {
        let _ = write!(out, "    <tr>");

        let starts_group = i == 0 || rows[i - 1].variable != key.variable;
        if starts_group {
            let span = rows[i..]
                .iter()
                .take_while(|k| k.variable == key.variable)
                .count();
            if span > 1 {
                let _ = write!(
                    out,
                    "<th class=\"row_heading\" rowspan=\"{}\">{}</th>",
                    span,
                    escape(&key.variable)
                );
            } else {
                let _ = write!(
                    out,
                    "<th class=\"row_heading\">{}</th>",
                    escape(&key.variable)
                );
            }
        }
        let _ = write!(
            out,
            "<th class=\"row_heading\">{}</th>",
            escape(&key.frequency)
        );

        for cell in cells {
            write_cell(out, cell.as_str());
        }
        let _ = writeln!(out, "</tr>");
    }

    let _ = writeln!(out, "  </tbody>");
}

fn write_cell(out: &mut String, value: &str) {
    let css = CellStyle::for_value(value).css();
    if css.is_empty() {
        let _ = write!(out, "<td>{}</td>", escape(value));
    } else {
        let _ = write!(out, "<td style=\"{}\">{}</td>", css, escape(value));
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
