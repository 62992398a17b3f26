//! Tests for the voice session state machine

use super::*;
use crate::test_utils::test_helpers::FakeRecognizer;
use std::time::{Duration, Instant};

fn input_with(recognizer: Arc<FakeRecognizer>) -> VoiceInput {
    VoiceInput::new(VoiceCapability::Available(recognizer), "en-IN")
}

/// Poll until the session leaves Listening or the timeout passes
fn wait_for_session(input: &mut VoiceInput, timeout_ms: u64) -> Option<String> {
    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(timeout_ms) {
        if let Some(transcript) = input.poll() {
            return Some(transcript);
        }
        if !input.is_listening() {
            return None;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

#[test]
fn test_unavailable_activation_reports_reason() {
    let mut input = VoiceInput::new(
        VoiceCapability::Unavailable("no speech recognizer configured".to_string()),
        "en-IN",
    );

    match input.activate() {
        Activation::Unsupported(message) => {
            assert!(message.contains("not supported"));
            assert!(message.contains("microphone"));
            assert!(message.contains("no speech recognizer configured"));
        }
        other => panic!("Expected Unsupported, got {:?}", other),
    }
    assert_eq!(input.state(), VoiceState::Idle);
    assert_eq!(input.poll(), None);
}

#[test]
fn test_successful_session_yields_transcript_once() {
    let recognizer = FakeRecognizer::saying("red shoes");
    let mut input = input_with(recognizer.clone());

    assert_eq!(input.activate(), Activation::Started);
    assert_eq!(input.state(), VoiceState::Listening);

    assert_eq!(wait_for_session(&mut input, 2000), Some("red shoes".to_string()));
    assert_eq!(input.state(), VoiceState::Idle);
    assert_eq!(input.poll(), None);
    assert_eq!(recognizer.calls(), 1);
}

#[test]
fn test_transcript_is_trimmed() {
    let mut input = input_with(FakeRecognizer::saying("  milk \n"));
    input.activate();
    assert_eq!(wait_for_session(&mut input, 2000), Some("milk".to_string()));
}

#[test]
fn test_no_result_returns_to_idle() {
    let mut input = input_with(FakeRecognizer::silent());
    input.activate();

    assert_eq!(wait_for_session(&mut input, 2000), None);
    assert_eq!(input.state(), VoiceState::Idle);
}

#[test]
fn test_blank_transcript_is_no_result() {
    let mut input = input_with(FakeRecognizer::saying("   "));
    input.activate();

    assert_eq!(wait_for_session(&mut input, 2000), None);
    assert_eq!(input.state(), VoiceState::Idle);
}

#[test]
fn test_recognition_error_returns_to_idle_silently() {
    let mut input = input_with(FakeRecognizer::failing());
    input.activate();

    assert_eq!(wait_for_session(&mut input, 2000), None);
    assert_eq!(input.state(), VoiceState::Idle);
}

#[test]
fn test_second_activation_while_listening() {
    let recognizer = FakeRecognizer::saying("tea");
    let mut input = input_with(recognizer.clone());

    assert_eq!(input.activate(), Activation::Started);
    assert_eq!(input.activate(), Activation::AlreadyListening);

    wait_for_session(&mut input, 2000);
    assert_eq!(recognizer.calls(), 1);
}

#[test]
fn test_idle_poll_returns_nothing() {
    let mut input = input_with(FakeRecognizer::saying("tea"));
    assert_eq!(input.poll(), None);
    assert_eq!(input.state(), VoiceState::Idle);
}

#[test]
fn test_dropping_while_listening_cancels_recognizer() {
    let recognizer = FakeRecognizer::saying("tea");
    let mut input = input_with(recognizer.clone());
    input.activate();

    drop(input);

    assert_eq!(recognizer.cancels(), 1);
}

#[test]
fn test_cancel_returns_to_idle_without_result() {
    let recognizer = FakeRecognizer::saying("tea");
    let mut input = input_with(recognizer.clone());
    input.activate();

    input.cancel();

    assert_eq!(input.state(), VoiceState::Idle);
    assert_eq!(input.poll(), None);
    assert_eq!(recognizer.cancels(), 1);
}

#[test]
fn test_finished_session_is_not_cancelled_on_drop() {
    let recognizer = FakeRecognizer::saying("tea");
    let mut input = input_with(recognizer.clone());
    input.activate();
    assert_eq!(wait_for_session(&mut input, 2000), Some("tea".to_string()));

    drop(input);

    assert_eq!(recognizer.cancels(), 0);
}
