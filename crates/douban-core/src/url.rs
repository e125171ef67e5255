//! URL helper functions for Douban search
//!
//! Provides functions for building the search URL and resolving result links.

use reqwest::Url;

/// Default site origin
pub const BASE_URL: &str = "https://www.douban.com";

/// Default search category ("books")
pub const BOOKS_CATEGORY: &str = "1001";

/// Builds the search URL for a given query
///
/// URL encodes the category and query and appends them to `{base_url}/search`.
///
/// # Arguments
/// * `base_url` - Site origin, with or without a trailing slash
/// * `category` - Category id passed as `cat`
/// * `query` - Search query string
///
/// # Example
/// ```
/// use douban_core::url::build_search_url;
/// let url = build_search_url("https://www.douban.com", "1001", "三体 刘慈欣");
/// assert_eq!(
///     url,
///     "https://www.douban.com/search?cat=1001&q=%E4%B8%89%E4%BD%93%20%E5%88%98%E6%85%88%E6%AC%A3"
/// );
/// ```
pub fn build_search_url(base_url: &str, category: &str, query: &str) -> String {
    format!(
        "{}/search?cat={}&q={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(category),
        urlencoding::encode(query)
    )
}

/// Resolves a result `href` into an absolute URL
///
/// Absolute hrefs are returned verbatim; relative ones are joined onto `base`.
/// Returns an empty string for an empty href or one that cannot be joined.
///
/// # Example
/// ```
/// use douban_core::url::resolve_link;
/// use reqwest::Url;
/// let base = Url::parse("https://www.douban.com").unwrap();
/// assert_eq!(resolve_link(&base, "/subject/1/"), "https://www.douban.com/subject/1/");
/// assert_eq!(resolve_link(&base, "https://book.douban.com/x"), "https://book.douban.com/x");
/// ```
pub fn resolve_link(base: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }

    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    base.join(href).map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    #[test]
    fn test_build_search_url_simple() {
        let url = build_search_url(BASE_URL, BOOKS_CATEGORY, "rust");
        assert_eq!(url, "https://www.douban.com/search?cat=1001&q=rust");
    }

    #[test]
    fn test_build_search_url_with_spaces_and_reserved_chars() {
        let url = build_search_url(BASE_URL, BOOKS_CATEGORY, "a&b c");
        assert_eq!(url, "https://www.douban.com/search?cat=1001&q=a%26b%20c");
    }

    #[test]
    fn test_build_search_url_trailing_slash_base() {
        let url = build_search_url("http://127.0.0.1:8080/", "1002", "x");
        assert_eq!(url, "http://127.0.0.1:8080/search?cat=1002&q=x");
    }

    #[test]
    fn test_resolve_link_keeps_absolute_verbatim() {
        let href = "https://www.douban.com/link2/?url=https%3A%2F%2Fbook.douban.com%2Fsubject%2F1%2F";
        assert_eq!(resolve_link(&base(), href), href);
    }

    #[test]
    fn test_resolve_link_joins_relative() {
        assert_eq!(
            resolve_link(&base(), "subject/2567698/"),
            "https://www.douban.com/subject/2567698/"
        );
    }

    #[test]
    fn test_resolve_link_empty() {
        assert_eq!(resolve_link(&base(), "   "), "");
    }
}
