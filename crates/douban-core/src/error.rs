//! Error types for the Douban search scraper
//!
//! Every failure of a search call is classified into one variant with a
//! human-readable message. The enum serializes as that message so callers
//! can forward it verbatim.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all Douban scraper operations
#[derive(Error, Debug)]
pub enum DoubanError {
    /// The site answered with a status below 500 other than 200
    #[error("Request failed with status code {0}")]
    RequestFailed(u16),

    /// The site answered 200 with an empty body
    #[error("Received an empty response")]
    EmptyResponse,

    /// The site served a human-verification page instead of results
    #[error("Access restricted, the site requires human verification")]
    BotChallenge,

    /// The page parsed but contained no usable result
    #[error("No matching results found")]
    NoResults,

    /// The outbound request exceeded the client timeout
    #[error("Request timed out, please try again later")]
    Timeout,

    /// Transport-level failure (connection error or 5xx status)
    #[error("Request error: {0}")]
    RequestError(String),

    /// Any other failure while requesting or parsing
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Query was empty; no request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configured base URL could not be used
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DoubanError {
    /// Classify a `reqwest` error into the search failure taxonomy
    ///
    /// Timeouts are checked first since reqwest also flags them as request errors.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        if let Some(status) = error.status() {
            return Self::RequestError(status.as_u16().to_string());
        }

        if error.is_connect() || error.is_request() || error.is_redirect() {
            return Self::RequestError(error.to_string());
        }

        Self::ExtractionFailed(error.to_string())
    }
}

impl From<reqwest::Error> for DoubanError {
    fn from(error: reqwest::Error) -> Self {
        Self::from_reqwest(error)
    }
}

impl Serialize for DoubanError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Douban scraper operations
pub type Result<T> = std::result::Result<T, DoubanError>;
