use crate::config::types::{Config, CrawlConfig, HttpConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl parameters
pub fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    let scheme = config.base_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Base URL '{}' must use HTTP or HTTPS",
            config.base_url
        )));
    }

    if config.base_url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Base URL '{}' has no host",
            config.base_url
        )));
    }

    if config.search_string.is_empty() {
        return Err(ConfigError::Validation(
            "search_string cannot be empty".to_string(),
        ));
    }

    if config.skip_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "skip_limit must be >= 1, got {}",
            config.skip_limit
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.summary_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "summary_path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;

    fn crawl_config() -> CrawlConfig {
        CrawlConfig::new(Url::parse("http://x.test/").unwrap(), "hello")
    }

    fn config() -> Config {
        Config {
            crawl: crawl_config(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&config()).is_ok());
    }

    #[test]
    fn test_empty_search_string() {
        let mut config = config();
        config.crawl.search_string = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_skip_limit() {
        let crawl = crawl_config().with_skip_limit(0);
        assert!(validate_crawl_config(&crawl).is_err());
    }

    #[test]
    fn test_hostless_base_url() {
        let crawl = CrawlConfig::new(Url::parse("mailto:a@x.test").unwrap(), "hello");
        assert!(matches!(
            validate_crawl_config(&crawl),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_file_base_url() {
        let crawl = CrawlConfig::new(Url::parse("file:///tmp/index.html").unwrap(), "hello");
        assert!(validate_crawl_config(&crawl).is_err());
    }

    #[test]
    fn test_blank_user_agent() {
        let mut config = config();
        config.http.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeouts() {
        let mut request_timeout = config();
        request_timeout.http.timeout_secs = 0;
        assert!(validate(&request_timeout).is_err());

        let mut connect_timeout = config();
        connect_timeout.http.connect_timeout_secs = 0;
        assert!(validate(&connect_timeout).is_err());
    }

    #[test]
    fn test_empty_summary_path() {
        let mut config = config();
        config.output.summary_path = Some(PathBuf::new());
        assert!(validate(&config).is_err());
    }
}
