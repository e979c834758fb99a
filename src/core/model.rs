// LogLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// rendering dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::EntryError;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

// =============================================================================
// Log Entry (validated output of the structured matcher)
// =============================================================================

/// Raw string captures produced by the combined-log pattern, before any
/// coercion. Borrowed straight out of the regex match.
#[derive(Debug, Clone, Copy)]
pub struct RawEntry<'a> {
    pub ip: &'a str,
    pub timestamp: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub status: &'a str,
    pub size: &'a str,
    pub user_agent: &'a str,
}

/// A single validated access-log record.
///
/// Constructed transiently per matching line; only its field values feed
/// the aggregate counters, which are the durable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Client address, non-empty.
    pub ip: String,

    /// Request timestamp in UTC. `None` when the source string does not
    /// parse against the combined-log layout (a soft failure — the entry
    /// still counts toward every other aggregate).
    pub timestamp: Option<DateTime<Utc>>,

    /// HTTP verb, non-empty.
    pub method: String,

    /// Requested resource, non-empty.
    pub path: String,

    /// HTTP status code (the pattern constrains this to three digits).
    pub status: u16,

    /// Response size in bytes; `"-"` and empty captures coerce to 0.
    pub size: u64,

    /// User agent string, may be empty.
    pub user_agent: String,
}

impl LogEntry {
    /// Coerce raw captures into a typed record, or fail.
    ///
    /// Pure construction, no side effects. A failure here means the line is
    /// treated as unmatched by the structured path and falls through to the
    /// generic heuristics — it never aborts the run.
    pub fn try_from_raw(raw: RawEntry<'_>) -> Result<Self, EntryError> {
        if raw.ip.is_empty() {
            return Err(EntryError::MissingField { field: "ip" });
        }
        if raw.method.is_empty() {
            return Err(EntryError::MissingField { field: "method" });
        }
        if raw.path.is_empty() {
            return Err(EntryError::MissingField { field: "path" });
        }

        // The pattern already constrains status to three digits, but the
        // constructor must defend against reuse with arbitrary input.
        let status: u16 = raw
            .status
            .parse()
            .map_err(|_| EntryError::MalformedField {
                field: "status",
                value: raw.status.to_string(),
            })?;

        let size: u64 = match raw.size {
            "-" | "" => 0,
            s => s.parse().map_err(|_| EntryError::MalformedField {
                field: "size",
                value: s.to_string(),
            })?,
        };

        // Timestamp is advisory: a malformed one must not reject the entry.
        let timestamp = DateTime::parse_from_str(raw.timestamp, constants::ACCESS_TIMESTAMP_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            ip: raw.ip.to_string(),
            timestamp,
            method: raw.method.to_string(),
            path: raw.path.to_string(),
            status,
            size,
            user_agent: raw.user_agent.to_string(),
        })
    }
}

// =============================================================================
// Log format classification
// =============================================================================

/// Detected input format, sticky for the lifetime of a parser instance.
///
/// `Unknown → Generic` the first time a heuristic fires on any line;
/// `Unknown|Generic → Apache` the first time a line fully passes the
/// structured path. Once `Apache` is reached it is never revisited, even
/// when later lines fail structured matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Unknown,
    Generic,
    Apache,
}

impl LogFormat {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LogFormat::Unknown => "unknown",
            LogFormat::Generic => "generic",
            LogFormat::Apache => "apache",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Frequency counter
// =============================================================================

/// Insertion-ordered frequency table.
///
/// Keys are remembered in first-seen order so that ranked views can break
/// count ties deterministically. Counts are monotonically non-decreasing
/// for the lifetime of the counter.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    index: HashMap<String, usize>,
    rows: Vec<(String, u64)>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `key`, registering it at the end on first sight.
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.rows[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.rows.len());
                self.rows.push((key.to_string(), 1));
            }
        }
    }

    /// Current count for `key` (0 when never seen).
    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.rows[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// Snapshot in first-seen order.
    pub fn snapshot(&self) -> CountTable {
        CountTable {
            rows: self.rows.clone(),
        }
    }

    /// Snapshot sorted descending by count. The sort is stable, so equal
    /// counts keep their first-seen order.
    pub fn ranked(&self) -> CountTable {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        CountTable { rows }
    }

    /// The `n` highest-count keys, descending, first-seen tie-break.
    pub fn top(&self, n: usize) -> CountTable {
        let mut table = self.ranked();
        table.truncate(n);
        table
    }
}

// =============================================================================
// Count table (report-facing snapshot)
// =============================================================================

/// An ordered `{category: count}` table detached from the live counter.
///
/// Serialises as a JSON object whose key order is the table's row order,
/// so exported reports keep ranking information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountTable {
    rows: Vec<(String, u64)>,
}

impl CountTable {
    pub fn rows(&self) -> &[(String, u64)] {
        &self.rows
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts in the table.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// Keep only the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Copy of this table sorted descending by count (stable).
    pub fn ranked(&self) -> CountTable {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        CountTable { rows }
    }
}

impl Serialize for CountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (key, count) in &self.rows {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
