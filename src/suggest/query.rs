use std::fmt;

use serde::Deserialize;

/// A search query with surrounding whitespace removed
///
/// The empty query is valid and means "no suggestions".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry returned by the suggestion lookup endpoint
///
/// Only `name` is consumed; any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionItem {
    pub name: String,
}

impl SuggestionItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Suggestions in server order
pub type SuggestionList = Vec<SuggestionItem>;

/// Parse a lookup response body (a JSON array of objects with a `name`)
pub fn parse_suggestions(body: &str) -> Result<SuggestionList, serde_json::Error> {
    serde_json::from_str(body)
}
