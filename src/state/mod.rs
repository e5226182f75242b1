//! State module for tracking crawl progress
//!
//! `CrawlState` holds the visited set, the pages that matched, and the
//! consecutive-skip streak for one run.

mod crawl_state;

pub use crawl_state::CrawlState;
