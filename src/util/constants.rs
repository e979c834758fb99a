// LogLens - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report limits
// =============================================================================

/// Number of entries retained in the top-IP and top-path report tables.
pub const REPORT_TOP_N: usize = 10;

/// Default value for the --top-ips CLI flag.
pub const DEFAULT_TOP_IPS: usize = 10;

// =============================================================================
// Parsing
// =============================================================================

/// chrono layout for Apache/Nginx combined-log timestamps,
/// e.g. `25/Dec/2025:17:15:32 -0600`.
pub const ACCESS_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
