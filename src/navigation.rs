//! Search-results navigation targets
//!
//! Builds the URL of the results listing for a chosen suggestion or a
//! submitted query. The term travels in the `search` query parameter.

use reqwest::Url;
use thiserror::Error;

/// Query parameter the results view reads the term from
pub const SEARCH_PARAM: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Invalid results view URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// How the user arrived at a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOrigin {
    /// A rendered suggestion was selected
    Suggestion,
    /// Free text was submitted from the query field
    FreeText,
    /// A voice transcript was submitted
    Voice,
}

/// Terminal action of a search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub term: String,
    pub url: String,
    pub origin: NavigationOrigin,
}

/// The results-listing view that navigation targets point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    base: Url,
}

impl ResultsView {
    pub fn parse(url: &str) -> Result<Self, NavigationError> {
        let base = Url::parse(url).map_err(|e| NavigationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if base.cannot_be_a_base() {
            return Err(NavigationError::InvalidUrl {
                url: url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self { base })
    }

    /// URL of the results listing for `term`
    ///
    /// Existing query parameters on the base URL are kept, except a previous
    /// `search` parameter which is replaced.
    pub fn url_for(&self, term: &str) -> String {
        let retained: Vec<(String, String)> = self
            .base
            .query_pairs()
            .filter(|(key, _)| key != SEARCH_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.base.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(SEARCH_PARAM, term);
        }
        url.into()
    }

    pub fn navigate(&self, term: &str, origin: NavigationOrigin) -> Navigation {
        Navigation {
            term: term.to_string(),
            url: self.url_for(term),
            origin,
        }
    }
}

/// Results URL for `term` on the view at `results_url`
pub fn search_results_url(results_url: &str, term: &str) -> Result<String, NavigationError> {
    Ok(ResultsView::parse(results_url)?.url_for(term))
}

/// Extract the decoded `search` term from a results URL
pub fn search_term(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
