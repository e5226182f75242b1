//! Configuration module for Sumi-Seek
//!
//! A run is configured from the command line, optionally layered over a TOML file
//! that carries crawler defaults, HTTP client settings and report options.
//!
//! # Example
//!
//! ```no_run
//! use sumi_seek::config::{load_file_config, resolve_config, Overrides};
//! use std::path::Path;
//!
//! let file = load_file_config(Path::new("sumi-seek.toml")).unwrap();
//! let config = resolve_config("https://example.com/", "needle", file, Overrides::default()).unwrap();
//! println!("Skip limit: {}", config.crawl.skip_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, CrawlerFileConfig, FileConfig, HttpConfig, OutputConfig, Overrides,
    DEFAULT_SKIP_LIMIT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_file_config, resolve_config};
pub use validation::{validate, validate_crawl_config};
