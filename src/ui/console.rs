// LogLens - ui/console.rs
//
// Console presentation of the analysis report: a banner plus one
// two-column table per populated category. Display order within each
// table is count-descending (the export keeps the report's own order).

use crate::core::report::Report;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::path::Path;

/// Print the post-analysis banner lines.
pub fn print_banner(path: &Path, line_count: u64, report: &Report) {
    println!(
        "{} {}: {} lines",
        "Analyzed".green().bold(),
        path.display(),
        line_count
    );
    println!("{} {} entries", "Found".blue().bold(), report.found_entries());
    println!(
        "{} {}",
        "Format:".magenta().bold(),
        report.format().label().to_uppercase()
    );
}

/// Render every populated table of the report.
pub fn print_report(report: &Report) {
    match report {
        Report::Generic { levels, ips, .. } => {
            print_table("Log Levels", "Level", levels.ranked().rows());
            print_table("Top IPs", "IP", ips.ranked().rows());
        }
        Report::Access {
            ips,
            status_codes,
            top_paths,
            methods,
            ..
        } => {
            print_table("Status Codes", "Code", status_codes.ranked().rows());
            // Already ranked by the report; re-sorting is a no-op but keeps
            // the truncated --top-ips table ordered too.
            print_table("Top IPs", "IP", ips.ranked().rows());
            print_table("Top Paths", "Path", top_paths.rows());
            print_table("HTTP Methods", "Method", methods.ranked().rows());
        }
    }
}

fn print_table(title: &str, category: &str, rows: &[(String, u64)]) {
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![category.to_string(), "Count".to_string()]);
    for (key, count) in rows {
        table.add_row(vec![key.clone(), count.to_string()]);
    }

    println!();
    println!("{}", title.cyan().bold());
    println!("{table}");
}
