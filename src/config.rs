//! Configuration loading
//!
//! Reads `<config dir>/storefind/config.toml`. A missing file means defaults;
//! an unreadable or invalid file also falls back to defaults but carries a
//! warning for the UI to show.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_ENDPOINT, DEFAULT_LOCALE, DEFAULT_MAX_VISIBLE, DEFAULT_RESULTS_URL,
    MAX_VISIBLE_LIMIT, SuggestionsConfig, VoiceConfig,
};

/// Outcome of loading the configuration
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("storefind").join("config.toml"))
}

/// Load the config from its default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult::default(),
    }
}

/// Load the config from `path`
pub fn load_config_from(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(mut config) => {
            let warning = check_max_visible(&mut config, path);
            ConfigResult { config, warning }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!(
                "Invalid config {}: {}. Using defaults.",
                path.display(),
                e.message()
            )),
        },
    }
}

/// Reset an out-of-range `max_visible` to the default
fn check_max_visible(config: &mut Config, path: &Path) -> Option<String> {
    let max_visible = config.suggestions.max_visible;
    if (1..=MAX_VISIBLE_LIMIT).contains(&max_visible) {
        return None;
    }

    config.suggestions.max_visible = DEFAULT_MAX_VISIBLE;
    Some(format!(
        "Invalid max_visible {} in {}: must be 1 to {}. Using {}.",
        max_visible,
        path.display(),
        MAX_VISIBLE_LIMIT,
        DEFAULT_MAX_VISIBLE
    ))
}
