//! HTML rendering of validation results.
//!
//! One section per asset: a heading, then a table with a row of image
//! previews, a row of bucket labels, and a row of size annotations. Valid
//! cells are styled `goodSize`, everything else `wrongSize`, with the
//! stylesheet left to an external `mystyle.css` next to the report.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use dpi_scale::tiers::Expected;

use crate::error::{AuditError, AuditResult};
use crate::validator::{AssetRow, BucketCell, Classification, ValidationReport};

/// Report artifact name, written to the invocation working directory.
const REPORT_FILE: &str = "index.html";

const GOOD_CLASS: &str = "goodSize";
const WRONG_CLASS: &str = "wrongSize";

/// Render the complete document: the fixed skeleton wrapping one section
/// per asset. The document is fully regenerated on every run.
pub fn render_document(report: &ValidationReport) -> String {
    let mut body = String::new();
    for row in &report.rows {
        render_asset(&mut body, row);
    }
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"mystyle.css\">\n\
         <meta charset=\"utf-8\">\n\
         </head>\n\
         <body role=\"document\">\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// Write the rendered document as `index.html` under `dir`, replacing any
/// previous report. Returns the artifact path.
pub fn write_report(html: &str, dir: &Path) -> AuditResult<PathBuf> {
    let path = dir.join(REPORT_FILE);
    fs::write(&path, html).map_err(|e| AuditError::report_write(&path, e))?;
    Ok(path)
}

fn render_asset(out: &mut String, row: &AssetRow) {
    let _ = writeln!(out, "<h1>{}</h1>", escape(&row.name));
    out.push_str("<table>\n<tr>");
    for cell in &row.cells {
        render_preview(out, row, cell);
    }
    out.push_str("</tr>\n<tr>");
    for cell in &row.cells {
        let _ = write!(out, "<td>{}</td>", cell.tier.dir);
    }
    out.push_str("</tr>\n<tr>");
    for cell in &row.cells {
        let _ = write!(out, "<td>{}</td>", size_annotation(cell));
    }
    out.push_str("</tr>\n</table>\n");
}

fn render_preview(out: &mut String, row: &AssetRow, cell: &BucketCell) {
    if matches!(cell.state, Classification::Missing) {
        out.push_str("<td><img src=''/></td>");
    } else {
        let _ = write!(
            out,
            "<td><img src='{}'/></td>",
            escape(&row.display_path.display().to_string())
        );
    }
}

fn size_annotation(cell: &BucketCell) -> String {
    match cell.state {
        Classification::Valid { actual } => {
            format!("<span class='{GOOD_CLASS}'>{actual}</span>")
        }
        Classification::Invalid {
            actual: Some(actual),
        } => format!(
            "<span class='{WRONG_CLASS}'>{actual} (expected {})</span>",
            expected_label(cell.expected)
        ),
        Classification::Invalid { actual: None } => format!(
            "<span class='{WRONG_CLASS}'>? (expected {})</span>",
            expected_label(cell.expected)
        ),
        Classification::Missing => format!(
            "<span class='{WRONG_CLASS}'>[missing, expected {}]</span>",
            expected_label(cell.expected)
        ),
    }
}

fn expected_label(expected: Option<Expected>) -> String {
    match expected {
        Some(expected) => expected.to_string(),
        None => "?".to_string(),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
