// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/search_suggestions";
pub const DEFAULT_RESULTS_URL: &str = "http://127.0.0.1:5000/items";
pub const DEFAULT_MAX_VISIBLE: usize = 10;
/// Largest accepted `max_visible`
pub const MAX_VISIBLE_LIMIT: usize = 50;
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Suggestion lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Lookup endpoint; the query is sent as the `q` parameter
    pub endpoint: String,
    /// Results view; terms are sent as the `search` parameter
    pub results_url: String,
    pub max_visible: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results_url: DEFAULT_RESULTS_URL.to_string(),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Voice input configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub enabled: bool,
    /// Speech recognizer program, looked up in PATH
    pub command: Option<String>,
    /// Arguments; `{locale}` is replaced with the configured locale
    pub args: Vec<String>,
    pub locale: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        VoiceConfig {
            enabled: true,
            command: None,
            args: Vec::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}
