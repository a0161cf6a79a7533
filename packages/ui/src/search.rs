//! Tour search terms and the search-results route.

use std::fmt;

use thiserror::Error;

use crate::config::SearchConfig;

/// Query parameter carrying the search term on the results route.
pub const SEARCH_QUERY_PARAM: &str = "searchQuery";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a search term")]
    EmptyTerm,
}

/// Reject an empty term. Anything else, whitespace included, is searched as typed.
pub fn validate_term(raw: &str) -> Result<String, SearchError> {
    if raw.is_empty() {
        return Err(SearchError::EmptyTerm);
    }
    Ok(raw.to_string())
}

/// Path of the search-results page for `term`, e.g. `/tour/search?searchQuery=new%20york`.
pub fn search_route(config: &SearchConfig, term: &str) -> String {
    format!("{}?{}", config.results_path, SearchQuery::new(term))
}

/// The query string of the search-results route.
///
/// Parses from and formats to `searchQuery=<urlencoded term>`, so it can be
/// used directly as a router query segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let term = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == SEARCH_QUERY_PARAM)
            .map(|(_, value)| decode_component(value))
            .unwrap_or_default();
        Self { term }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            SEARCH_QUERY_PARAM,
            urlencoding::encode(&self.term)
        )
    }
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!("Keeping undecodable search query {value:?}: {e}");
            value
        }
    }
}
