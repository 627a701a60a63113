use crate::error::Result;
use crate::strip::{validate_strip_lines, StripDiagnostic};
use std::fs;
use std::path::Path;

/// Render a validation report for a strips text file.
///
/// Content never fails the call: a clean file yields a single OK line,
/// problems are listed one per line. Only I/O can error.
pub fn validate_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(render_report(&validate_strip_lines(&text)))
}

fn render_report(report: &[StripDiagnostic]) -> String {
    if report.is_empty() {
        return "OK: every line is a 26-letter strip with no duplicates or missing letters\n"
            .to_string();
    }
    let mut output = String::new();
    for diagnostic in report {
        output.push_str(&format!("{}\n", diagnostic));
    }
    output
}
