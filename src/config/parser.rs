use crate::config::types::{Config, CrawlConfig, FileConfig, Overrides, DEFAULT_SKIP_LIMIT};
use crate::config::validation::validate;
use crate::url::parse_base_url;
use crate::{ConfigError, ConfigResult};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The file only carries defaults; the base URL and search string always come from
/// the caller, so the file is not validated on its own.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sumi_seek::config::load_file_config;
///
/// let file = load_file_config(Path::new("sumi-seek.toml")).unwrap();
/// println!("Skip limit: {:?}", file.crawler.skip_limit);
/// ```
pub fn load_file_config(path: &Path) -> ConfigResult<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Builds the configuration for one run
///
/// Command line values win over the file: flags are enabled if either side enables
/// them, and an explicit skip limit replaces the file's. A skip limit of 0 from either
/// source means "use the default".
///
/// # Example
///
/// ```
/// use sumi_seek::config::{resolve_config, FileConfig, Overrides};
///
/// let config = resolve_config(
///     "https://example.com/",
///     "needle",
///     FileConfig::default(),
///     Overrides { recursive: true, ..Overrides::default() },
/// )
/// .unwrap();
/// assert!(config.crawl.recursive);
/// assert_eq!(config.crawl.skip_limit, 20);
/// ```
pub fn resolve_config(
    link: &str,
    search_string: &str,
    file: FileConfig,
    overrides: Overrides,
) -> Result<Config, ConfigError> {
    let base_url = parse_base_url(link).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

    let skip_limit = overrides
        .skip_limit
        .or(file.crawler.skip_limit)
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_SKIP_LIMIT);

    let crawl = CrawlConfig::new(base_url, search_string)
        .with_case_insensitive(overrides.case_insensitive || file.crawler.case_insensitive)
        .with_recursive(overrides.recursive || file.crawler.recursive)
        .with_skip_limit(skip_limit);

    let mut output = file.output;
    if overrides.summary_path.is_some() {
        output.summary_path = overrides.summary_path;
    }
    if overrides.no_color {
        output.color = false;
    }

    let config = Config {
        crawl,
        http: file.http,
        output,
    };

    validate(&config)?;

    Ok(config)
}
