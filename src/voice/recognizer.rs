use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, PoisonError};
use std::thread;

use thiserror::Error;

/// Placeholder in recognizer arguments replaced by the locale
const LOCALE_PLACEHOLDER: &str = "{locale}";

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Failed to start speech recognizer: {0}")]
    SpawnFailed(String),

    #[error("Speech recognition failed: {0}")]
    RecognitionFailed(String),
}

/// A single-utterance speech recognition service
pub trait SpeechRecognizer: Send + Sync {
    /// Listen for one utterance and return the best transcript
    ///
    /// `Ok(None)` means nothing was recognized.
    fn recognize(&self, locale: &str) -> Result<Option<String>, VoiceError>;

    /// Abandon the session in progress, releasing the microphone
    ///
    /// A `recognize` call cut short this way returns `Ok(None)`.
    fn cancel(&self) {}
}

/// Recognizer backed by an external program
///
/// The program is expected to capture one utterance and print the transcript
/// (best candidate first) on stdout.
#[derive(Debug)]
pub struct CommandRecognizer {
    program: PathBuf,
    args: Vec<String>,
    /// Child of the session in progress
    running: Mutex<Option<Child>>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            running: Mutex::new(None),
        }
    }

    fn args_for(&self, locale: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(LOCALE_PLACEHOLDER, locale))
            .collect()
    }

    fn take_running(&self) -> Option<Child> {
        self.running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn recognize(&self, locale: &str) -> Result<Option<String>, VoiceError> {
        let mut child = Command::new(&self.program)
            .args(self.args_for(locale))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| VoiceError::SpawnFailed(e.to_string()))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        *self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(child);

        // Drained separately so a chatty recognizer never blocks on a full pipe
        let stderr_reader = stderr.map(|mut pipe| {
            thread::spawn(move || {
                let mut text = String::new();
                let _ = pipe.read_to_string(&mut text);
                text
            })
        });

        let mut transcript = String::new();
        let read = match stdout {
            Some(mut pipe) => pipe.read_to_string(&mut transcript).map(|_| ()),
            None => Ok(()),
        };

        let Some(mut child) = self.take_running() else {
            log::debug!("Speech recognizer cancelled");
            return Ok(None);
        };
        let status = child
            .wait()
            .map_err(|e| VoiceError::RecognitionFailed(e.to_string()))?;
        read.map_err(|e| VoiceError::RecognitionFailed(e.to_string()))?;

        if !status.success() {
            let stderr_text = stderr_reader
                .and_then(|reader| reader.join().ok())
                .unwrap_or_default();
            return Err(VoiceError::RecognitionFailed(stderr_text.trim().to_string()));
        }

        Ok(first_transcript(&transcript))
    }

    fn cancel(&self) {
        if let Some(mut child) = self.take_running() {
            let _ = child.kill();
            let _ = child.wait();
            log::debug!("Killed speech recognizer {}", self.program.display());
        }
    }
}

/// First non-blank line of recognizer output, trimmed
pub fn first_transcript(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "recognizer_tests.rs"]
mod recognizer_tests;
