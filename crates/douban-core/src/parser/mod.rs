//! HTML parsers for Douban search pages
//!
//! Contains bot-challenge detection and search result extraction.

pub mod challenge;
pub mod search;

pub use challenge::is_bot_challenge;
pub use search::parse_search_results;
