// LogLens - core/export.rs
//
// JSON export of the analysis report.
// Core layer: writes to any Write trait object; the app layer owns the
// file handle and the path.

use crate::core::report::Report;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Serialise the report as pretty-printed JSON.
///
/// The output is a direct structural dump of the report: table key order
/// is preserved, so ranked tables stay ranked in the file.
pub fn export_json<W: Write>(report: &Report, writer: W, export_path: &Path) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, report).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })
}
