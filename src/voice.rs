//! Voice input
//!
//! Optional speech-to-query capability. Whether it is available is decided
//! once, at startup, from the `[voice]` config section; the rest of the app
//! only ever sees a `VoiceCapability`.

mod recognizer;
mod voice_state;

use std::sync::Arc;

pub use recognizer::{CommandRecognizer, SpeechRecognizer, VoiceError, first_transcript};
pub use voice_state::{Activation, VoiceInput, VoiceState};

use crate::config::VoiceConfig;

/// Shown when voice input is activated without a recognizer
pub const UNSUPPORTED_MESSAGE: &str = "Voice search is not supported here. \
Configure a speech recognizer ([voice] command in config.toml) or allow microphone access.";

/// Speech recognition as detected at startup
#[derive(Clone)]
pub enum VoiceCapability {
    Available(Arc<dyn SpeechRecognizer>),
    /// Reason the capability is missing
    Unavailable(String),
}

impl VoiceCapability {
    /// Select the capability from config
    ///
    /// Unavailable when voice is disabled, no recognizer is configured, or the
    /// configured program cannot be found on PATH.
    pub fn detect(config: &VoiceConfig) -> Self {
        if !config.enabled {
            return VoiceCapability::Unavailable("voice input is disabled in config".to_string());
        }

        let Some(command) = config
            .command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
        else {
            return VoiceCapability::Unavailable("no speech recognizer configured".to_string());
        };

        match which::which(command) {
            Ok(program) => {
                log::debug!("Voice input using recognizer {}", program.display());
                VoiceCapability::Available(Arc::new(CommandRecognizer::new(
                    program,
                    config.args.clone(),
                )))
            }
            Err(e) => VoiceCapability::Unavailable(format!(
                "speech recognizer '{}' not found in PATH ({})",
                command, e
            )),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, VoiceCapability::Available(_))
    }
}

impl std::fmt::Debug for VoiceCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceCapability::Available(_) => f.write_str("Available"),
            VoiceCapability::Unavailable(reason) => {
                f.debug_tuple("Unavailable").field(reason).finish()
            }
        }
    }
}

/// User-facing text for an unavailable capability
pub fn unsupported_message(reason: &str) -> String {
    format!("{} ({})", UNSUPPORTED_MESSAGE, reason)
}
