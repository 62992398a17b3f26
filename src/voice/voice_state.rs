//! Voice session state machine
//!
//! `Idle -> Listening -> Idle`. Recognition runs on a background thread so
//! the UI keeps drawing; the transcript comes back through a channel and is
//! handed out by `poll()` exactly once.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use super::recognizer::VoiceError;
use super::{VoiceCapability, unsupported_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Listening,
}

/// Result of pressing the voice control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A recognition session started
    Started,
    /// A session is already running; nothing new was started
    AlreadyListening,
    /// No capability; carries the message to show the user
    Unsupported(String),
}

type RecognitionResult = Result<Option<String>, VoiceError>;

pub struct VoiceInput {
    capability: VoiceCapability,
    locale: String,
    state: VoiceState,
    result_rx: Option<Receiver<RecognitionResult>>,
}

impl VoiceInput {
    pub fn new(capability: VoiceCapability, locale: &str) -> Self {
        Self {
            capability,
            locale: locale.to_string(),
            state: VoiceState::Idle,
            result_rx: None,
        }
    }

    pub fn capability(&self) -> &VoiceCapability {
        &self.capability
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == VoiceState::Listening
    }

    /// Start a single-utterance session
    pub fn activate(&mut self) -> Activation {
        let recognizer = match &self.capability {
            VoiceCapability::Unavailable(reason) => {
                return Activation::Unsupported(unsupported_message(reason));
            }
            VoiceCapability::Available(recognizer) => Arc::clone(recognizer),
        };

        if self.is_listening() {
            return Activation::AlreadyListening;
        }

        let (result_tx, result_rx) = mpsc::channel();
        let locale = self.locale.clone();
        std::thread::spawn(move || {
            let _ = result_tx.send(recognizer.recognize(&locale));
        });

        self.result_rx = Some(result_rx);
        self.state = VoiceState::Listening;
        log::debug!("Voice session started ({})", self.locale);
        Activation::Started
    }

    /// Collect the session outcome, if it has arrived
    ///
    /// Returns the transcript once on success. Empty results and recognition
    /// errors end the session silently.
    pub fn poll(&mut self) -> Option<String> {
        let rx = self.result_rx.as_ref()?;

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("Voice session ended without a result");
                self.finish();
                return None;
            }
        };

        self.finish();
        match outcome {
            Ok(Some(transcript)) if !transcript.trim().is_empty() => {
                Some(transcript.trim().to_string())
            }
            Ok(_) => {
                log::debug!("Voice session recognized nothing");
                None
            }
            Err(e) => {
                log::debug!("Voice session failed: {}", e);
                None
            }
        }
    }

    /// Abandon a running session without a result
    pub fn cancel(&mut self) {
        if !self.is_listening() {
            return;
        }
        if let VoiceCapability::Available(recognizer) = &self.capability {
            recognizer.cancel();
        }
        self.finish();
        log::debug!("Voice session cancelled");
    }

    fn finish(&mut self) {
        self.result_rx = None;
        self.state = VoiceState::Idle;
    }
}

impl Drop for VoiceInput {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "voice_state_tests.rs"]
mod voice_state_tests;
