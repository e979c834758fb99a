// LogLens - app/analyze.rs
//
// Orchestration: the only place the input file is opened and read.
// Lines are decoded, stripped, and handed to the core parser one at a
// time; the core performs no file I/O of its own.

use crate::core::export;
use crate::core::parser::LineParser;
use crate::core::report::Report;
use crate::util::error::{ExportError, LogLensError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Outcome of analysing one log file.
#[derive(Debug)]
pub struct Analysis {
    /// The file that was analysed.
    pub path: PathBuf,

    /// Total lines read, matched or not.
    pub line_count: u64,

    /// Aggregate report snapshot taken after the last line.
    pub report: Report,
}

/// Read `path` line by line and fold every line into a fresh parser.
///
/// Malformed or unrecognised lines never abort the run; an empty or
/// fully-malformed file still yields a report (all counters zero,
/// format unknown). Only I/O failures are errors.
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let file = File::open(path).map_err(|e| LogLensError::Input {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut parser = LineParser::new();
    let mut line_count: u64 = 0;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LogLensError::Input {
            path: path.to_path_buf(),
            source: e,
        })?;
        parser.parse_line(line.trim());
        line_count += 1;
    }

    let report = parser.report();
    tracing::debug!(
        file = %path.display(),
        lines = line_count,
        format = %report.format(),
        "Analysis complete"
    );

    Ok(Analysis {
        path: path.to_path_buf(),
        line_count,
        report,
    })
}

/// Write the JSON report to `export_path`.
///
/// A failure here is reported to the caller but must not disturb the
/// console report that was already computed and printed.
pub fn write_export(report: &Report, export_path: &Path) -> Result<()> {
    let file = File::create(export_path).map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    export::export_json(report, BufWriter::new(file), export_path)?;
    tracing::debug!(file = %export_path.display(), "Report exported");
    Ok(())
}
