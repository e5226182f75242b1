//! End-of-run report and its console rendering

use chrono::{DateTime, Utc};
use colored::{Color, Colorize};
use std::fmt;
use std::io::{self, Write};

/// How a run ended
///
/// All three are normal endings; none is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Every reachable same-domain link was processed
    Exhausted,

    /// Too many links in a row were skipped
    SkipLimitReached,

    /// The process was interrupted from outside
    Interrupted,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::SkipLimitReached => "skip_limit_reached",
            Self::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub base_url: String,
    pub search_string: String,

    /// Matching pages in discovery order
    pub found_links: Vec<String>,

    /// Always equal to `found_links.len()`
    pub found_count: usize,

    /// Distinct candidate links seen
    pub visited_count: usize,

    pub skip_limit: u32,
    pub termination: Termination,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock length of the run
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Colours `text` only when colour is enabled
fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the console report
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use sumi_seek::output::{render_report, CrawlReport, Termination};
///
/// let now = Utc::now();
/// let report = CrawlReport {
///     base_url: "https://example.com/".to_string(),
///     search_string: "needle".to_string(),
///     found_links: vec!["https://example.com/a".to_string()],
///     found_count: 1,
///     visited_count: 4,
///     skip_limit: 20,
///     termination: Termination::Exhausted,
///     started_at: now,
///     finished_at: now,
/// };
///
/// let text = render_report(&report, false);
/// assert!(text.contains("> https://example.com/a"));
/// assert!(text.contains("Found 'needle' 1 times!"));
/// ```
pub fn render_report(report: &CrawlReport, color: bool) -> String {
    let mut out = String::new();

    match report.termination {
        Termination::SkipLimitReached => {
            out.push('\n');
            out.push_str(&paint(
                &format!(
                    "Maximum skipped links' limit ({}) is reached!",
                    report.skip_limit
                ),
                Color::Red,
                color,
            ));
            out.push('\n');
        }
        Termination::Interrupted => {
            out.push('\n');
            out.push_str(&paint("Interrupted, exiting...", Color::Yellow, color));
            out.push('\n');
        }
        Termination::Exhausted => {}
    }

    out.push_str("\nResults:\n");
    out.push_str("\n==================== Found links containing the search word:\n");
    for link in &report.found_links {
        out.push_str(&paint(&format!("> {}", link), Color::Green, color));
        out.push('\n');
    }

    out.push_str("\n==================== Count:\n");
    out.push_str(&paint(
        &format!(
            "Found '{}' {} times!",
            report.search_string, report.found_count
        ),
        Color::Yellow,
        color,
    ));
    out.push('\n');

    out
}

/// Writes the console report to `writer`
pub fn write_report<W: Write>(writer: &mut W, report: &CrawlReport, color: bool) -> io::Result<()> {
    writer.write_all(render_report(report, color).as_bytes())?;
    writer.flush()
}

/// Prints the console report to stdout
pub fn print_report(report: &CrawlReport, color: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report, color)
}
