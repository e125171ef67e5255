//! Bot-challenge detection for Douban pages
//!
//! When Douban suspects automation it serves a human-verification page
//! (often with status 200) whose `<title>` contains the word "验证".

use scraper::{Html, Selector};

use crate::error::{DoubanError, Result};

/// Marker that appears in the title of the verification page
pub const CHALLENGE_MARKER: &str = "验证";

/// Returns true if the document is a human-verification page
///
/// Only the text of `<title>` elements is inspected; the body may contain
/// anything, including regular results.
///
/// # Errors
/// Returns `ExtractionFailed` if the title selector cannot be built
pub fn is_bot_challenge(document: &Html) -> Result<bool> {
    let title_selector = Selector::parse("title")
        .map_err(|e| DoubanError::ExtractionFailed(format!("Invalid selector: {:?}", e)))?;

    let title: String = document
        .select(&title_selector)
        .flat_map(|el| el.text())
        .collect();

    Ok(title.contains(CHALLENGE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_challenge_title() {
        let document = Html::parse_document(
            "<html><head><title>禁止访问 - 请输入验证码</title></head><body></body></html>",
        );
        assert!(is_bot_challenge(&document).unwrap());
    }

    #[test]
    fn test_regular_search_page_is_not_challenge() {
        let document = Html::parse_document(
            "<html><head><title>搜索: 三体</title></head><body><div class=\"result\"></div></body></html>",
        );
        assert!(!is_bot_challenge(&document).unwrap());
    }

    #[test]
    fn test_marker_in_body_only_is_not_challenge() {
        let document = Html::parse_document(
            "<html><head><title>豆瓣搜索</title></head><body><p>验证</p></body></html>",
        );
        assert!(!is_bot_challenge(&document).unwrap());
    }

    #[test]
    fn test_page_without_title() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(!is_bot_challenge(&document).unwrap());
    }
}
