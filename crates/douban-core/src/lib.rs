//! Douban Search Scraper Core Library
//!
//! Provides an async API for searching Douban and extracting the result list
//! (title, link, rating, vote count, author/cast line, synopsis).
//!
//! # Overview
//!
//! A search is a short pipeline:
//! - one disguised GET request that looks like a desktop Chrome navigation
//! - status and body validation (any status below 500 is inspected)
//! - bot-challenge detection on the page title
//! - lenient per-result parsing: a malformed result is logged and skipped
//!
//! Every failure is reported as a [`DoubanError`] variant; an empty result
//! list is never returned.
//!
//! # Example
//!
//! ```no_run
//! use douban_core::{DoubanScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = DoubanScraper::new()?;
//!
//!     for record in scraper.search("三体").await? {
//!         println!("{} ({:?}): {}", record.title, record.rating, record.link);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (skipped results, challenge pages,
//! result counts) and never installs a subscriber itself.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, DoubanClient};

// Re-export error types
pub use error::{DoubanError, Result};

// Re-export parser functions
pub use parser::{is_bot_challenge, parse_search_results};

// Re-export main scraper API
pub use self::scraper::{DoubanScraper, search};

// Re-export data types
pub use types::SearchRecord;

// Re-export URL helper functions for convenience
pub use url::{build_search_url, resolve_link};
