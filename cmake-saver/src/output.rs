//! Output formatting for run reports.
//!
//! Report mode normally streams bare paths while the run is in progress
//! (see [`crate::run`]); these helpers render a finished [`RunReport`].

use std::io::Write;

use crate::report::RunReport;

/// Write a single non-conforming path on its own line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_path(path: &std::path::Path, writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer, "{}", path.display())
}

/// Format a `RunReport` as pretty JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")
}
