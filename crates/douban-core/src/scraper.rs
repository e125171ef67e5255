//! Main scraper API for Douban search
//!
//! Combines the disguised HTTP client with the search results parser.

use crate::client::{ClientConfig, DoubanClient};
use crate::error::{DoubanError, Result};
use crate::parser::parse_search_results;
use crate::types::SearchRecord;

/// Main scraper API for Douban search
///
/// Holds one HTTP client that is reused across calls. Each `search` call is
/// independent: one request, no retries, no shared mutable state.
pub struct DoubanScraper {
    client: DoubanClient,
}

impl DoubanScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = DoubanClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if the configured base URL is not absolute
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = DoubanClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search Douban and extract the result list
    ///
    /// # Arguments
    /// * `query` - Search query string, sent exactly as given
    ///
    /// # Returns
    /// Non-empty vector of records in page order
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty (no request is made)
    /// - `Timeout` if the request exceeds the client timeout
    /// - `RequestError` on connection failures or a 5xx status
    /// - `RequestFailed` for any other non-200 status
    /// - `EmptyResponse` if the body is empty
    /// - `BotChallenge` if Douban served a verification page
    /// - `NoResults` if the page held no usable result
    /// - `ExtractionFailed` for anything else
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> douban_core::Result<()> {
    /// use douban_core::DoubanScraper;
    /// let scraper = DoubanScraper::new()?;
    /// let results = scraper.search("三体").await?;
    /// for record in results {
    ///     println!("{}: {}", record.title, record.link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<SearchRecord>> {
        if query.is_empty() {
            return Err(DoubanError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        tracing::trace!(query, "Douban search");

        let html = self.client.fetch_search_page(query).await?;
        parse_search_results(&html, self.client.base_url())
    }
}

/// Search Douban with a default scraper
///
/// Convenience for one-off calls; builds a fresh client each time.
pub async fn search(query: &str) -> Result<Vec<SearchRecord>> {
    DoubanScraper::new()?.search(query).await
}
