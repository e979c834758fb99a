// LogLens - core/report.rs
//
// Report snapshot types. A report is a detached copy of the parser's
// aggregates: the caller can hold, render, or serialise it without any
// reference to mutable parser state.
//
// The serialised shape is the export schema: top-level `format`, then
// `levels`/`ips` for generic input or `summary`/`ips`/`status_codes`/
// `top_paths`/`methods` for combined-log input.

use crate::core::model::{CountTable, LogFormat};
use serde::Serialize;

/// Totals block of an access-log report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Lines that produced a successful structured match.
    pub total: u64,
}

/// On-demand snapshot of everything the parser has accumulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Fallback shape for unknown or generic input: full level and IP
    /// tables, no truncation.
    Generic {
        format: LogFormat,
        levels: CountTable,
        ips: CountTable,
    },

    /// Combined-log shape: totals plus per-category tables. `ips` and
    /// `top_paths` are already capped at the report top-N.
    Access {
        format: LogFormat,
        summary: Summary,
        ips: CountTable,
        status_codes: CountTable,
        top_paths: CountTable,
        methods: CountTable,
    },
}

impl Report {
    pub fn format(&self) -> LogFormat {
        match self {
            Report::Generic { format, .. } | Report::Access { format, .. } => *format,
        }
    }

    /// Entry count shown in the console banner: level hits plus status-code
    /// hits. Generic IP-only hits are deliberately not included.
    pub fn found_entries(&self) -> u64 {
        match self {
            Report::Generic { levels, .. } => levels.total(),
            Report::Access { status_codes, .. } => status_codes.total(),
        }
    }

    /// Apply the --top-ips limit: re-rank the IP table by count and keep
    /// the first `n` rows. Applies to either report shape.
    pub fn limit_ips(&mut self, n: usize) {
        match self {
            Report::Generic { ips, .. } | Report::Access { ips, .. } => {
                let mut ranked = ips.ranked();
                ranked.truncate(n);
                *ips = ranked;
            }
        }
    }
}
