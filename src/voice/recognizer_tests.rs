//! Tests for speech recognizers

use super::*;

#[test]
fn test_first_transcript_skips_blank_lines() {
    assert_eq!(
        first_transcript("\n  \n red shoes \nred shoe\n"),
        Some("red shoes".to_string())
    );
}

#[test]
fn test_first_transcript_empty_output() {
    assert_eq!(first_transcript(""), None);
    assert_eq!(first_transcript(" \n\t\n"), None);
}

#[test]
fn test_locale_placeholder_is_substituted() {
    let recognizer = CommandRecognizer::new(
        "stt-once",
        vec!["--lang".to_string(), "{locale}".to_string(), "--lang-tag={locale}".to_string()],
    );
    assert_eq!(
        recognizer.args_for("en-IN"),
        vec!["--lang", "en-IN", "--lang-tag=en-IN"]
    );
}

#[test]
fn test_missing_program_fails_to_spawn() {
    let recognizer = CommandRecognizer::new("/nonexistent/storefind-stt", Vec::new());
    let err = recognizer.recognize("en-IN").unwrap_err();
    assert!(matches!(err, VoiceError::SpawnFailed(_)));
}

#[cfg(unix)]
#[test]
fn test_command_output_becomes_transcript() {
    let recognizer = CommandRecognizer::new(
        "sh",
        vec!["-c".to_string(), "printf '\\nred shoes\\nred shows\\n'".to_string()],
    );
    assert_eq!(
        recognizer.recognize("en-IN").unwrap(),
        Some("red shoes".to_string())
    );
}

#[cfg(unix)]
#[test]
fn test_command_receives_locale() {
    let recognizer = CommandRecognizer::new(
        "sh",
        vec!["-c".to_string(), "echo \"$0\"".to_string(), "{locale}".to_string()],
    );
    assert_eq!(
        recognizer.recognize("hi-IN").unwrap(),
        Some("hi-IN".to_string())
    );
}

#[cfg(unix)]
#[test]
fn test_silent_command_is_no_result() {
    let recognizer = CommandRecognizer::new("true", Vec::new());
    assert_eq!(recognizer.recognize("en-IN").unwrap(), None);
}

#[cfg(unix)]
#[test]
fn test_failing_command_reports_stderr() {
    let recognizer = CommandRecognizer::new(
        "sh",
        vec!["-c".to_string(), "echo 'no microphone' >&2; exit 3".to_string()],
    );
    match recognizer.recognize("en-IN") {
        Err(VoiceError::RecognitionFailed(msg)) => assert_eq!(msg, "no microphone"),
        other => panic!("Expected RecognitionFailed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_cancel_kills_running_command() {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    let recognizer = Arc::new(CommandRecognizer::new(
        "sh",
        vec!["-c".to_string(), "exec sleep 30".to_string()],
    ));

    let session = {
        let recognizer = Arc::clone(&recognizer);
        std::thread::spawn(move || recognizer.recognize("en-IN"))
    };

    // Wait for the child to be spawned
    let start = Instant::now();
    while recognizer.running.lock().unwrap().is_none() {
        assert!(start.elapsed() < Duration::from_secs(5), "recognizer never started");
        std::thread::sleep(Duration::from_millis(5));
    }

    recognizer.cancel();
    let result = session.join().unwrap();

    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(result.unwrap(), None);
    assert!(recognizer.running.lock().unwrap().is_none());
}

#[test]
fn test_cancel_without_session_is_noop() {
    let recognizer = CommandRecognizer::new("stt-once", Vec::new());
    recognizer.cancel();
    assert!(recognizer.running.lock().unwrap().is_none());
}
