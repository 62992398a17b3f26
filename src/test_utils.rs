#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::{self, Sender};

    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::suggest::{SuggestionItem, SuggestionRequest, SuggestionResponse};
    use crate::voice::{SpeechRecognizer, VoiceCapability, VoiceError};

    pub fn test_app() -> App {
        App::with_voice(
            &Config::default(),
            VoiceCapability::Unavailable("no speech recognizer configured".to_string()),
        )
        .expect("default config is valid")
    }

    /// App wired to channels the test drives in place of the fetch worker
    pub fn connected_app() -> (App, UnboundedReceiver<SuggestionRequest>, Sender<SuggestionResponse>) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.suggestions.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Feed `text` to the app one keystroke at a time
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_event(Event::Key(key(KeyCode::Char(ch))));
        }
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn loaded(request_id: u64, names: &[&str]) -> SuggestionResponse {
        SuggestionResponse::Loaded {
            request_id,
            items: names.iter().map(|n| SuggestionItem::new(*n)).collect(),
        }
    }

    /// Drain issued lookups, returning the last one
    pub fn last_request(rx: &mut UnboundedReceiver<SuggestionRequest>) -> Option<SuggestionRequest> {
        let mut last = None;
        while let Ok(request) = rx.try_recv() {
            last = Some(request);
        }
        last
    }

    pub fn visible_names(app: &App) -> Vec<String> {
        app.suggestions
            .view
            .entries()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// Tick the app until `done` holds or the timeout passes
    pub fn tick_until(app: &mut App, timeout_ms: u64, done: impl Fn(&App) -> bool) -> bool {
        let start = std::time::Instant::now();
        let timeout = std::time::Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick();
            if done(app) {
                return true;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        false
    }

    /// Recognizer returning a fixed outcome and counting calls
    pub struct FakeRecognizer {
        transcript: Option<String>,
        fail: bool,
        calls: AtomicUsize,
        cancels: AtomicUsize,
    }

    impl FakeRecognizer {
        pub fn saying(transcript: &str) -> Arc<Self> {
            Arc::new(Self {
                transcript: Some(transcript.to_string()),
                fail: false,
                calls: AtomicUsize::new(0),
                cancels: AtomicUsize::new(0),
            })
        }

        pub fn silent() -> Arc<Self> {
            Arc::new(Self {
                transcript: None,
                fail: false,
                calls: AtomicUsize::new(0),
                cancels: AtomicUsize::new(0),
            })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self {
                transcript: None,
                fail: true,
                calls: AtomicUsize::new(0),
                cancels: AtomicUsize::new(0),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn cancels(&self) -> usize {
            self.cancels.load(Ordering::SeqCst)
        }
    }

    impl SpeechRecognizer for FakeRecognizer {
        fn recognize(&self, _locale: &str) -> Result<Option<String>, VoiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(VoiceError::RecognitionFailed("no microphone".to_string()));
            }
            Ok(self.transcript.clone())
        }

        fn cancel(&self) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn app_with_voice(recognizer: Arc<FakeRecognizer>) -> App {
        App::with_voice(&Config::default(), VoiceCapability::Available(recognizer))
            .expect("default config is valid")
    }
}
