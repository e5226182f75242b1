use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// Number of consecutive skipped links that ends a run unless configured otherwise
pub const DEFAULT_SKIP_LIMIT: u32 = 20;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("SumiSeek/", env!("CARGO_PKG_VERSION"));

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl parameters, fixed for the duration of a run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Traversal root and domain-scope anchor
    pub base_url: Url,

    /// Literal string searched for in page text
    pub search_string: String,

    /// Also accept matches after lowercasing both sides
    pub case_insensitive: bool,

    /// Descend into the links of every accepted page
    pub recursive: bool,

    /// Consecutive skipped links that abort the whole run
    pub skip_limit: u32,
}

impl CrawlConfig {
    /// Creates a non-recursive, case-sensitive configuration with the default skip limit
    pub fn new(base_url: Url, search_string: impl Into<String>) -> Self {
        Self {
            base_url,
            search_string: search_string.into(),
            case_insensitive: false,
            recursive: false,
            skip_limit: DEFAULT_SKIP_LIMIT,
        }
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_skip_limit(mut self, skip_limit: u32) -> Self {
        self.skip_limit = skip_limit;
        self
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write a markdown summary of the run, if anywhere
    #[serde(rename = "summary-path")]
    pub summary_path: Option<PathBuf>,

    /// Colour the console report with ANSI escapes
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: None,
            color: true,
        }
    }
}

/// Contents of an optional TOML configuration file
///
/// Every section and key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub crawler: CrawlerFileConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// `[crawler]` section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrawlerFileConfig {
    #[serde(rename = "skip-limit")]
    pub skip_limit: Option<u32>,

    pub recursive: bool,

    #[serde(rename = "case-insensitive")]
    pub case_insensitive: bool,
}

/// Values given on the command line, layered over the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub case_insensitive: bool,
    pub recursive: bool,
    pub skip_limit: Option<u32>,
    pub summary_path: Option<PathBuf>,
    pub no_color: bool,
}
