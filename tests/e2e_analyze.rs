// LogLens - tests/e2e_analyze.rs
//
// End-to-end tests for the analysis pipeline.
//
// These tests exercise the real filesystem, real regex matching, and real
// chrono timestamp parsing — no mocks, no stubs. Each test writes a log
// file to disk, runs the full analyse-and-report path, and checks the
// resulting aggregates or exported JSON.

use loglens::app::analyze::{analyze_file, write_export};
use loglens::core::model::LogFormat;
use loglens::core::report::Report;
use std::io::Write;
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

const APACHE_SAMPLE: &str = concat!(
    "192.168.1.1 - - [25/Dec/2025:17:15:32 -0600] \"GET /api/users HTTP/1.1\" 200 1234 \"-\" \"Mozilla/5.0\"\n",
    "192.168.1.2 - - [25/Dec/2025:17:15:33 -0600] \"POST /api/data HTTP/1.1\" 201 567 \"-\" \"curl/7.68.0\"\n",
    "192.168.1.1 - - [25/Dec/2025:17:15:34 -0600] \"GET /api/users HTTP/1.1\" 200 1234 \"-\" \"Mozilla/5.0\"\n",
);

fn write_log(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".log").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Analysis E2E
// =============================================================================

/// An Apache combined sample produces the structured report shape with
/// correct per-category counts.
#[test]
fn e2e_apache_sample_aggregates() {
    let file = write_log(APACHE_SAMPLE);
    let analysis = analyze_file(file.path()).unwrap();

    assert_eq!(analysis.line_count, 3);
    assert_eq!(analysis.report.format(), LogFormat::Apache);

    let Report::Access {
        summary,
        ips,
        status_codes,
        top_paths,
        methods,
        ..
    } = analysis.report
    else {
        panic!("expected access report");
    };

    assert_eq!(summary.total, 3);
    assert_eq!(ips.get("192.168.1.1"), Some(2));
    assert_eq!(ips.get("192.168.1.2"), Some(1));
    assert_eq!(status_codes.get("200"), Some(2));
    assert_eq!(status_codes.get("201"), Some(1));
    assert_eq!(top_paths.get("/api/users"), Some(2));
    assert_eq!(top_paths.get("/api/data"), Some(1));
    assert_eq!(methods.get("GET"), Some(2));
    assert_eq!(methods.get("POST"), Some(1));
}

/// A plain application log lands in the generic shape with level and IP
/// tables.
#[test]
fn e2e_generic_sample_aggregates() {
    let file = write_log(
        "2025-01-01 12:00:00 INFO System started\n\
         ERROR: Connection dropped from 10.0.0.1\n\
         Just a random line of text.\n",
    );
    let analysis = analyze_file(file.path()).unwrap();

    assert_eq!(analysis.line_count, 3);
    assert_eq!(analysis.report.format(), LogFormat::Generic);

    let Report::Generic { levels, ips, .. } = analysis.report else {
        panic!("expected generic report");
    };
    assert_eq!(levels.get("INFO"), Some(1));
    assert_eq!(levels.get("ERROR"), Some(1));
    assert_eq!(ips.get("10.0.0.1"), Some(1));
}

/// A mixed file: once any line matches the structured format the report is
/// structured, and only the structured lines count toward its totals.
#[test]
fn e2e_mixed_file_reports_structured() {
    let mut content = String::from("INFO warmup line\n");
    content.push_str(APACHE_SAMPLE);
    content.push_str("ERROR trailing generic line\n");

    let file = write_log(&content);
    let analysis = analyze_file(file.path()).unwrap();

    assert_eq!(analysis.report.format(), LogFormat::Apache);
    let Report::Access { summary, .. } = analysis.report else {
        panic!("expected access report");
    };
    assert_eq!(summary.total, 3, "only combined-format lines count");
}

/// A file of pure noise completes with an unknown-format, all-zero report.
#[test]
fn e2e_fully_malformed_file_still_reports() {
    let file = write_log("lorem ipsum\ndolor sit amet\n");
    let analysis = analyze_file(file.path()).unwrap();

    assert_eq!(analysis.line_count, 2);
    assert_eq!(analysis.report.format(), LogFormat::Unknown);
    assert_eq!(analysis.report.found_entries(), 0);
}

/// Missing input file is an error before the core is ever invoked.
#[test]
fn e2e_missing_file_fails() {
    assert!(analyze_file(Path::new("/definitely/not/here.log")).is_err());
}

// =============================================================================
// Export E2E
// =============================================================================

/// Exported JSON matches the report schema and survives a reread.
#[test]
fn e2e_export_json_roundtrip() {
    let log = write_log(APACHE_SAMPLE);
    let analysis = analyze_file(log.path()).unwrap();

    let out = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write_export(&analysis.report, out.path()).unwrap();

    let data: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();

    assert_eq!(data["format"], "apache");
    assert_eq!(data["summary"]["total"], 3);
    assert_eq!(data["ips"]["192.168.1.1"], 2);
    assert_eq!(data["status_codes"]["200"], 2);
    assert_eq!(data["top_paths"]["/api/users"], 2);
    assert_eq!(data["methods"]["GET"], 2);
}

/// Export to an unwritable path fails without panicking.
#[test]
fn e2e_export_to_bad_path_fails() {
    let log = write_log("INFO hello\n");
    let analysis = analyze_file(log.path()).unwrap();
    assert!(write_export(&analysis.report, Path::new("/no/such/dir/out.json")).is_err());
}

// =============================================================================
// --top-ips behaviour
// =============================================================================

/// The IP table is re-ranked and truncated when a top-N limit is applied.
#[test]
fn e2e_top_ips_limit() {
    let file = write_log(
        "ping from 10.0.0.1\n\
         ping from 10.0.0.2\n\
         ping from 10.0.0.2\n\
         ping from 10.0.0.3\n",
    );
    let mut report = analyze_file(file.path()).unwrap().report;
    report.limit_ips(2);

    let Report::Generic { ips, .. } = report else {
        panic!("expected generic report");
    };
    assert_eq!(ips.len(), 2);
    assert_eq!(ips.rows()[0], ("10.0.0.2".to_string(), 2));
    assert_eq!(ips.rows()[1], ("10.0.0.1".to_string(), 1));
}
