//! HTTP client that disguises requests as a desktop browser
//!
//! Douban serves degraded or challenge pages to clients that do not look
//! like a real browser, so every request carries a full browser header set.
//! Responses with a status below 500 are handed back for inspection instead
//! of being treated as transport failures.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

use crate::error::{DoubanError, Result};
use crate::url::{BASE_URL, BOOKS_CATEGORY, build_search_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";
const MAX_REDIRECTS: usize = 5;

/// Browser fingerprint headers sent with every request
const FINGERPRINT_HEADERS: &[(&str, &str)] = &[
    (
        "sec-ch-ua",
        "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "same-origin"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
];

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site origin, also sent as `Referer` (default: "https://www.douban.com")
    pub base_url: String,
    /// Search category id (default: "1001", books)
    pub category: String,
    /// Request timeout in milliseconds (default: 5000)
    pub timeout_ms: u64,
    /// User-Agent header (default: desktop Chrome 120)
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            category: BOOKS_CATEGORY.to_string(),
            timeout_ms: 5000,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for the Douban search endpoint
///
/// Makes exactly one request per call; there is no retry logic.
pub struct DoubanClient {
    client: reqwest::Client,
    base_url: Url,
    category: String,
}

impl DoubanClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an absolute URL
    /// - `ExtractionFailed` if the underlying HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| DoubanError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(browser_headers(&config.base_url)?)
            .build()
            .map_err(|e| DoubanError::ExtractionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            category: config.category,
        })
    }

    /// Site origin used for requests and link resolution
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the search results page for a query
    ///
    /// # Returns
    /// The non-empty HTML body of a 200 response
    ///
    /// # Errors
    /// - `Timeout` if the request exceeds the configured timeout
    /// - `RequestError` on connection failures or a 5xx status
    /// - `RequestFailed` for any other non-200 status (body is not read)
    /// - `EmptyResponse` if the 200 body is empty
    pub async fn fetch_search_page(&self, query: &str) -> Result<String> {
        let url = build_search_url(self.base_url.as_str(), &self.category, query);
        tracing::trace!(%url, "Douban search request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DoubanError::from_reqwest)?;

        let status = response.status();
        check_status(status)?;

        let body = response.text().await.map_err(DoubanError::from_reqwest)?;
        tracing::trace!(bytes = body.len(), "Douban response received");

        if body.is_empty() {
            return Err(DoubanError::EmptyResponse);
        }

        Ok(body)
    }
}

/// Applies the status policy: 5xx is a transport failure, anything else
/// below 500 is a response, and only 200 is usable
fn check_status(status: StatusCode) -> Result<()> {
    if status.is_server_error() {
        return Err(DoubanError::RequestError(status.as_u16().to_string()));
    }

    if status != StatusCode::OK {
        return Err(DoubanError::RequestFailed(status.as_u16()));
    }

    Ok(())
}

/// Builds the header set that mimics a desktop Chrome navigation
///
/// `Accept-Encoding` is left to reqwest, which negotiates and decodes it.
fn browser_headers(referer: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(referer)
            .map_err(|_| DoubanError::InvalidUrl(format!("{} is not a valid Referer", referer)))?,
    );

    for &(name, value) in FINGERPRINT_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.douban.com");
        assert_eq!(config.category, "1001");
        assert_eq!(config.timeout_ms, 5000);
        assert!(config.user_agent.contains("Chrome/120"));
    }

    #[test]
    fn test_client_creation() {
        let client = DoubanClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080".to_string(),
            category: "1002".to_string(),
            timeout_ms: 1000,
            ..ClientConfig::default()
        };
        let client = DoubanClient::with_config(config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_client_rejects_relative_base_url() {
        let config = ClientConfig {
            base_url: "www.douban.com".to_string(),
            ..ClientConfig::default()
        };
        match DoubanClient::with_config(config) {
            Err(DoubanError::InvalidUrl(msg)) => assert!(msg.contains("www.douban.com")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_browser_headers() {
        let headers = browser_headers("https://www.douban.com").unwrap();
        assert_eq!(headers[header::REFERER], "https://www.douban.com");
        assert_eq!(headers[header::ACCEPT_LANGUAGE], ACCEPT_LANGUAGE);
        assert_eq!(headers["sec-fetch-mode"], "navigate");
        assert_eq!(headers["sec-fetch-site"], "same-origin");
        assert_eq!(headers["upgrade-insecure-requests"], "1");
        assert!(!headers.contains_key(header::ACCEPT_ENCODING));
    }

    #[test]
    fn test_check_status_ok() {
        assert!(check_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn test_check_status_client_errors_are_request_failed() {
        for code in [201u16, 204, 302, 403, 404, 418, 429, 499] {
            let status = StatusCode::from_u16(code).unwrap();
            match check_status(status) {
                Err(DoubanError::RequestFailed(c)) => assert_eq!(c, code),
                other => panic!("Expected RequestFailed({}), got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_check_status_server_errors_are_request_error() {
        for code in [500u16, 502, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            match check_status(status) {
                Err(DoubanError::RequestError(reason)) => assert_eq!(reason, code.to_string()),
                other => panic!("Expected RequestError, got {:?}", other),
            }
        }
    }
}
