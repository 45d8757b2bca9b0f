use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncyclopediaEntry {
    pub title: String,
    pub snippet: String,
    pub page_id: u64,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: SearchQueryResult,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryResult {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub pageid: u64,
    #[serde(default)]
    pub snippet: String,
}

/// Drops the highlight markup the search API wraps around matched words.
pub fn strip_search_markup(snippet: &str) -> String {
    snippet
        .replace("<span class=\"searchmatch\">", "")
        .replace("</span>", "")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
