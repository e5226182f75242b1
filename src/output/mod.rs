//! Output module for reporting crawl results
//!
//! This module handles:
//! - The end-of-run report and how the run terminated
//! - Rendering the report to the console, optionally coloured
//! - Writing a markdown summary file

mod markdown;
mod report;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use report::{print_report, render_report, write_report, CrawlReport, Termination};
