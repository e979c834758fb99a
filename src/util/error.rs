// LogLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors keep the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogLens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogLensError {
    /// The input log file could not be opened or read.
    Input { path: PathBuf, source: io::Error },

    /// Report export failed.
    Export(ExportError),
}

impl fmt::Display for LogLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { path, source } => {
                write!(f, "Cannot read log file '{}': {source}", path.display())
            }
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for LogLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry validation errors
// ---------------------------------------------------------------------------

/// Errors raised while coercing raw regex captures into a typed `LogEntry`.
///
/// These never escape the parsing cascade: a failed construction makes the
/// line fall through to the generic heuristics instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// A mandatory capture was empty.
    MissingField { field: &'static str },

    /// A captured substring could not be coerced to its typed field.
    MalformedField { field: &'static str, value: String },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "Missing required field '{field}'")
            }
            Self::MalformedField { field, value } => {
                write!(f, "Malformed value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for EntryError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to JSON report export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LogLensError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for LogLens results.
pub type Result<T> = std::result::Result<T, LogLensError>;
