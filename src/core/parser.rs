// LogLens - core/parser.rs
//
// Streaming line classification: a format cascade that tries the
// Apache/Nginx combined layout first and falls back to generic
// token/IP heuristics, folding every line into cumulative counters.
// Core layer: consumes already-decoded lines, never touches the filesystem.

use crate::core::model::{Counter, LogEntry, LogFormat, RawEntry};
use crate::core::report::{Report, Summary};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled combined-log pattern, built once per process.
///
/// Capture layout: `IP - - [TIMESTAMP] "METHOD PATH PROTOCOL" STATUS SIZE
/// "REFERRER" "USER_AGENT"`. Status is constrained to three digits and
/// size to digits-or-dash, so construction failures only arise from
/// pathological reuse, not from matched lines.
fn access_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?P<ip>\S+) \S+ \S+ \[(?P<timestamp>[^\]]+)\] "(?P<method>\S+) (?P<path>\S+) (?P<protocol>\S+)" (?P<status>\d{3}) (?P<size>\d+|-) "[^"]*" "(?P<user_agent>[^"]*)""#,
        )
        .expect("access_pattern: invalid regex")
    })
}

/// Leftmost level token. Alternation is leftmost-first, so a `WARNING`
/// line records under `WARN`; this matches the reference behaviour.
fn level_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"INFO|WARN|WARNING|ERROR|CRITICAL|DEBUG")
            .expect("level_pattern: invalid regex")
    })
}

/// First IPv4-shaped substring. Purely syntactic: four dot-separated
/// 1-3 digit groups, no octet range validation.
fn ipv4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}")
            .expect("ipv4_pattern: invalid regex")
    })
}

// =============================================================================
// Structured (combined-format) aggregation
// =============================================================================

/// Aggregates for lines that pass the full structured path.
#[derive(Debug, Default)]
pub struct AccessLogParser {
    total: u64,
    ips: Counter,
    status_codes: Counter,
    paths: Counter,
    methods: Counter,
}

impl AccessLogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt the combined-log match and fold a successful entry into the
    /// aggregates. Returns true only when both the pattern matched and the
    /// entry validated; any failure leaves all counters untouched so the
    /// caller can fall through to the generic heuristics.
    pub fn parse_line(&mut self, line: &str) -> bool {
        let Some(caps) = access_pattern().captures(line) else {
            return false;
        };

        let raw = RawEntry {
            ip: &caps["ip"],
            timestamp: &caps["timestamp"],
            method: &caps["method"],
            path: &caps["path"],
            status: &caps["status"],
            size: &caps["size"],
            user_agent: &caps["user_agent"],
        };

        let entry = match LogEntry::try_from_raw(raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "Matched line failed validation");
                return false;
            }
        };

        self.ips.increment(&entry.ip);
        self.status_codes.increment(&entry.status.to_string());
        self.paths.increment(&entry.path);
        self.methods.increment(&entry.method);
        self.total += 1;
        true
    }

    /// Number of lines that produced a successful structured match.
    pub fn total(&self) -> u64 {
        self.total
    }
}

// =============================================================================
// Line parser (format cascade)
// =============================================================================

/// Main parser with format auto-detection.
///
/// Owns all aggregate state: one structured set (via `AccessLogParser`)
/// and one generic set, switched by a sticky `LogFormat` flag. A single
/// instance is exclusively owned by one caller: construct, feed N lines,
/// read the report one or more times.
#[derive(Debug, Default)]
pub struct LineParser {
    format: LogFormat,
    levels: Counter,
    ips: Counter,
    access: AccessLogParser,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and fold it into the cumulative statistics.
    ///
    /// The structured path is tried first (it is the more specific format).
    /// On any structured failure the two generic heuristics run
    /// independently; both may fire on the same line.
    pub fn parse_line(&mut self, line: &str) {
        if self.access.parse_line(line) {
            self.format = LogFormat::Apache;
            return;
        }

        let mut matched = false;

        if let Some(m) = level_pattern().find(line) {
            self.levels.increment(m.as_str());
            matched = true;
        }

        if let Some(m) = ipv4_pattern().find(line) {
            self.ips.increment(m.as_str());
            matched = true;
        }

        // The flag only moves off Unknown; it never downgrades Apache.
        if matched && self.format == LogFormat::Unknown {
            self.format = LogFormat::Generic;
        }
    }

    /// Current format classification.
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Snapshot of the current aggregates. Pure: repeated calls with no
    /// intervening `parse_line` yield identical reports.
    pub fn report(&self) -> Report {
        match self.format {
            LogFormat::Apache => Report::Access {
                format: self.format,
                summary: Summary {
                    total: self.access.total,
                },
                ips: self.access.ips.top(crate::util::constants::REPORT_TOP_N),
                status_codes: self.access.status_codes.snapshot(),
                top_paths: self.access.paths.top(crate::util::constants::REPORT_TOP_N),
                methods: self.access.methods.snapshot(),
            },
            LogFormat::Unknown | LogFormat::Generic => Report::Generic {
                format: self.format,
                levels: self.levels.snapshot(),
                ips: self.ips.snapshot(),
            },
        }
    }
}
