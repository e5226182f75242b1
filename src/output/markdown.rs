//! Markdown summary generation
//!
//! This module writes a human-readable markdown summary of a crawl run next to
//! the console report.

use crate::output::report::{CrawlReport, Termination};
use crate::SeekError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown summary of a run to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(SeekError)` - Failed to write summary
pub fn generate_markdown_summary(report: &CrawlReport, output_path: &Path) -> Result<(), SeekError> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Sumi-Seek Search Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Base URL**: {}\n", report.base_url));
    md.push_str(&format!("- **Search String**: `{}`\n", report.search_string));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", report.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        report.duration().num_seconds()
    ));
    md.push_str(&format!("- **Ended**: {}\n\n", describe(report)));

    // Overall statistics
    md.push_str("## Statistics\n\n");
    md.push_str(&format!("- **Links Seen**: {}\n", report.visited_count));
    md.push_str(&format!("- **Matches**: {}\n\n", report.found_count));

    // Matches
    md.push_str("## Pages Containing the Search String\n\n");
    if report.found_links.is_empty() {
        md.push_str("_No matches._\n");
    } else {
        for (i, link) in report.found_links.iter().enumerate() {
            md.push_str(&format!("{}. <{}>\n", i + 1, link));
        }
    }

    md
}

fn describe(report: &CrawlReport) -> String {
    match report.termination {
        Termination::Exhausted => "all reachable links processed".to_string(),
        Termination::SkipLimitReached => format!(
            "skip limit of {} consecutive skipped links reached",
            report.skip_limit
        ),
        Termination::Interrupted => "interrupted".to_string(),
    }
}
