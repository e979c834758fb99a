// LogLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Analysis run, console report, optional JSON export

use clap::Parser;
use loglens::app::analyze;
use loglens::ui::console;
use loglens::util;
use std::path::PathBuf;

/// LogLens - Server access log analyser.
///
/// Classifies each line of a log file against known formats
/// (Apache/Nginx combined, then generic heuristics) and aggregates
/// counts by log level, status code, client IP, path, and method.
#[derive(Parser, Debug)]
#[command(name = "loglens", version, about)]
struct Cli {
    /// Path to the log file to analyse.
    logfile: PathBuf,

    /// Export the JSON report to this file.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Show top N IPs.
    #[arg(short = 't', long = "top-ips", default_value_t = util::constants::DEFAULT_TOP_IPS)]
    top_ips: usize,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        file = %cli.logfile.display(),
        "LogLens starting"
    );

    let analysis = match analyze::analyze_file(&cli.logfile) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut report = analysis.report;
    report.limit_ips(cli.top_ips);

    console::print_banner(&analysis.path, analysis.line_count, &report);
    console::print_report(&report);

    // The console report above is already complete; an export failure must
    // not retract it, but the run still exits non-zero because a requested
    // artifact was not produced.
    if let Some(ref export_path) = cli.export {
        match analyze::write_export(&report, export_path) {
            Ok(()) => {
                println!();
                println!("Exported to {}", export_path.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
