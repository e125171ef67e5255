//! Search results parser for Douban
//!
//! Parses HTML from the search results page and extracts one record per
//! `.result` container. A malformed container is logged and skipped; it
//! never aborts the whole page.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::error::{DoubanError, Result};
use crate::parser::challenge::is_bot_challenge;
use crate::types::SearchRecord;
use crate::url::resolve_link;

/// Localized "people rated" phrase inside the vote-count span
const VOTE_COUNT_MARKER: &str = "人评价";

/// Leading `[...]` annotation on a result title
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[[^\]]*\]\s*").expect("title prefix pattern is valid"));

/// Why a single result container produced no record
#[derive(Error, Debug, PartialEq, Eq)]
enum NodeError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),

    #[error("empty required field `{0}`")]
    EmptyField(&'static str),
}

/// Compiled selectors for one result container
struct ResultSelectors {
    result: Selector,
    heading: Selector,
    anchor: Selector,
    rating: Selector,
    rating_info_span: Selector,
    subject_cast: Selector,
    content: Selector,
}

impl ResultSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            result: parse_selector(".result")?,
            heading: parse_selector(".title h3")?,
            anchor: parse_selector("a")?,
            rating: parse_selector(".rating_nums")?,
            rating_info_span: parse_selector(".rating-info span")?,
            subject_cast: parse_selector(".subject-cast")?,
            content: parse_selector(".content p")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| DoubanError::ExtractionFailed(format!("Invalid selector {}: {:?}", css, e)))
}

/// Parses search results HTML and returns the extracted records
///
/// # Arguments
/// * `html` - Raw HTML of a 200 search response
/// * `base_url` - Site origin used to resolve relative links
///
/// # Returns
/// Non-empty vector of records in document order
///
/// # Errors
/// - `BotChallenge` if the page title carries the verification marker
/// - `NoResults` if no container yielded a complete record
/// - `ExtractionFailed` if a selector cannot be built
pub fn parse_search_results(html: &str, base_url: &Url) -> Result<Vec<SearchRecord>> {
    let document = Html::parse_document(html);

    if is_bot_challenge(&document)? {
        tracing::warn!("Douban served a verification page");
        return Err(DoubanError::BotChallenge);
    }

    let selectors = ResultSelectors::new()?;

    let records = document.select(&selectors.result).enumerate().fold(
        Vec::new(),
        |mut records, (index, node)| {
            match parse_result_node(&node, &selectors, base_url) {
                Ok(record) => records.push(record),
                Err(NodeError::EmptyField(field)) => {
                    tracing::debug!(index, field, "Dropping incomplete search result");
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed search result");
                }
            }
            records
        },
    );

    if records.is_empty() {
        return Err(DoubanError::NoResults);
    }

    tracing::debug!(count = records.len(), "Douban results parsed");
    Ok(records)
}

/// Parses a single `.result` container
fn parse_result_node(
    node: &ElementRef,
    selectors: &ResultSelectors,
    base_url: &Url,
) -> std::result::Result<SearchRecord, NodeError> {
    let heading = node
        .select(&selectors.heading)
        .next()
        .ok_or(NodeError::MissingElement(".title h3"))?;

    let title = normalize_title(&heading.text().collect::<String>());
    if title.is_empty() {
        return Err(NodeError::EmptyField("title"));
    }

    let href = heading
        .select(&selectors.anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default();
    let link = resolve_link(base_url, href);
    if link.is_empty() {
        return Err(NodeError::EmptyField("link"));
    }

    let rating = non_empty(select_text(node, &selectors.rating));

    let rating_people = node
        .select(&selectors.rating_info_span)
        .map(|span| span.text().collect::<String>())
        .find(|text| text.contains(VOTE_COUNT_MARKER))
        .and_then(|text| non_empty(text.trim().to_string()));

    Ok(SearchRecord {
        title,
        link,
        rating,
        rating_people,
        info: select_text(node, &selectors.subject_cast),
        intro: select_text(node, &selectors.content),
    })
}

/// Strips a leading `[...]` annotation (e.g. "[书籍]") and trims
fn normalize_title(raw: &str) -> String {
    TITLE_PREFIX.replace(raw, "").trim().to_string()
}

/// Concatenated, trimmed text of every match of `selector` under `node`
fn select_text(node: &ElementRef, selector: &Selector) -> String {
    node.select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
