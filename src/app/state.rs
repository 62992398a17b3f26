use std::sync::mpsc;

use crate::config::Config;
use crate::error::StorefindError;
use crate::layout::LayoutRegions;
use crate::navigation::{Navigation, NavigationOrigin, ResultsView};
use crate::notification::NotificationState;
use crate::suggest::{Query, SuggestionClient, SuggestionController, worker};
use crate::voice::{Activation, VoiceCapability, VoiceInput};

use super::input_state::InputState;

/// Application state
///
/// One instance per search session. Owns the suggestion controller (and
/// through it the current request handle) and the voice session.
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionController,
    pub voice: VoiceInput,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub navigation: Option<Navigation>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App from configuration
    ///
    /// Voice capability is detected here, once. No lookups can be issued until
    /// `start_suggestion_worker` connects the fetch worker.
    pub fn new(config: &Config) -> Result<Self, StorefindError> {
        let capability = VoiceCapability::detect(&config.voice);
        Self::with_voice(config, capability)
    }

    /// Create a new App with an explicit voice capability
    pub fn with_voice(config: &Config, capability: VoiceCapability) -> Result<Self, StorefindError> {
        let results = ResultsView::parse(&config.suggestions.results_url)?;

        Ok(Self {
            input: InputState::new(),
            suggestions: SuggestionController::new(results, config.suggestions.max_visible),
            voice: VoiceInput::new(capability, &config.voice.locale),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            navigation: None,
            should_quit: false,
        })
    }

    /// Spawn the fetch worker for `endpoint` and connect it
    pub fn start_suggestion_worker(&mut self, endpoint: &str) -> Result<(), StorefindError> {
        let client = SuggestionClient::new(endpoint)?;
        let (response_tx, response_rx) = mpsc::channel();
        let request_tx = worker::spawn_worker(client, response_tx);
        self.suggestions.set_channels(request_tx, response_rx);
        Ok(())
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Where the session ended up, if it navigated
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// Periodic work between input events
    ///
    /// Applies arrived lookup results, collects a finished voice session and
    /// expires notifications.
    pub fn tick(&mut self) {
        self.suggestions.poll_responses();

        if let Some(transcript) = self.voice.poll() {
            self.submit_voice_transcript(&transcript);
        }

        self.notification.update();
    }

    /// The query field changed through user editing
    pub fn on_query_edited(&mut self) {
        let query = self.input.query().to_string();
        self.suggestions.on_query_changed(&query);
    }

    /// Submit the highlighted suggestion, or else the free-text query
    ///
    /// An empty query with nothing highlighted submits nothing.
    pub fn submit(&mut self) {
        if let Some(entry) = self.suggestions.view.selected_entry() {
            let navigation = Navigation {
                term: entry.name.clone(),
                url: entry.target.clone(),
                origin: NavigationOrigin::Suggestion,
            };
            self.finish(navigation);
            return;
        }

        let query = Query::new(self.input.query());
        if query.is_empty() {
            return;
        }
        let navigation = self
            .suggestions
            .results()
            .navigate(query.as_str(), NavigationOrigin::FreeText);
        self.finish(navigation);
    }

    /// Navigate to the suggestion at `index` in the visible set
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(entry) = self.suggestions.view.entry(index) else {
            return;
        };
        let navigation = Navigation {
            term: entry.name.clone(),
            url: entry.target.clone(),
            origin: NavigationOrigin::Suggestion,
        };
        self.finish(navigation);
    }

    /// Press the voice control
    pub fn activate_voice(&mut self) {
        match self.voice.activate() {
            Activation::Started => self.notification.show("Listening..."),
            Activation::AlreadyListening => {}
            Activation::Unsupported(message) => self.notification.show_warning(&message),
        }
    }

    /// Write a recognized transcript into the field and submit it
    fn submit_voice_transcript(&mut self, transcript: &str) {
        self.input.set_query(transcript);
        self.notification.dismiss();

        let query = Query::new(transcript);
        if query.is_empty() {
            return;
        }
        let navigation = self
            .suggestions
            .results()
            .navigate(query.as_str(), NavigationOrigin::Voice);
        self.finish(navigation);
    }

    fn finish(&mut self, navigation: Navigation) {
        log::debug!("Navigating to {}", navigation.url);
        self.navigation = Some(navigation);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
