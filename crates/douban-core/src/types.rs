//! Core data types for the Douban search scraper

use serde::{Deserialize, Serialize};

/// One entry parsed from a Douban search results page
///
/// `title` and `link` are always non-empty. Optional fields are omitted
/// from JSON when the page did not show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Item title with any leading `[...]` annotation removed
    pub title: String,

    /// Absolute URL to the item's detail page
    pub link: String,

    /// Average rating as shown by the site (e.g. "9.1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    /// Vote-count annotation (e.g. "(12345人评价)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_people: Option<String>,

    /// Author / cast / publisher line, possibly empty
    pub info: String,

    /// Short synopsis, possibly empty
    pub intro: String,
}
