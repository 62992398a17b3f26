//! Input controller for live suggestions
//!
//! Serializes query edits into at most one honored lookup. Every edit
//! invalidates the current handle; the only place results reach the view is
//! `apply_response`, which drops anything not tagged with the current handle.

use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::navigation::ResultsView;

use super::handle::RequestHandle;
use super::query::Query;
use super::view::SuggestionView;
use super::worker::{SuggestionRequest, SuggestionResponse};

pub struct SuggestionController {
    /// Channel to send lookups to the fetch worker
    request_tx: Option<UnboundedSender<SuggestionRequest>>,
    /// Channel to receive lookup outcomes from the fetch worker
    response_rx: Option<Receiver<SuggestionResponse>>,
    /// Handle of the lookup whose result may still be rendered
    current: Option<RequestHandle>,
    /// Last issued request id
    request_id: u64,
    results: ResultsView,
    pub view: SuggestionView,
}

impl SuggestionController {
    pub fn new(results: ResultsView, max_visible: usize) -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            current: None,
            request_id: 0,
            results,
            view: SuggestionView::new(max_visible),
        }
    }

    /// Set the channel handles for communication with the fetch worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestionRequest>,
        response_rx: Receiver<SuggestionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    /// React to an edit of the query field
    ///
    /// Returns true if a lookup was issued. An empty (or whitespace-only)
    /// query clears the view and issues nothing.
    pub fn on_query_changed(&mut self, raw: &str) -> bool {
        let query = Query::new(raw);

        self.invalidate_current();
        // The visible list belonged to the superseded query
        self.view.clear();

        if query.is_empty() {
            return false;
        }

        let Some(tx) = &self.request_tx else {
            log::debug!("No suggestion worker; skipping lookup for '{}'", query);
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let handle = RequestHandle::new(self.request_id);
        let request = SuggestionRequest {
            query: query.into_string(),
            request_id: handle.id(),
            cancel: handle.token().clone(),
        };

        if tx.send(request).is_err() {
            log::debug!("Suggestion worker disconnected");
            return false;
        }

        self.current = Some(handle);
        true
    }

    /// A click landed outside the suggestion area
    ///
    /// Clears the view only. The in-flight lookup keeps its handle, so a
    /// response for it is still honored while stale ones stay suppressed.
    pub fn on_outside_interaction(&mut self) {
        self.view.clear();
    }

    /// Drain the response channel and apply what is still current
    ///
    /// Returns true if the view changed.
    pub fn poll_responses(&mut self) -> bool {
        let responses: Vec<SuggestionResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return false,
        };

        let mut changed = false;
        for response in responses {
            changed |= self.apply_response(response);
        }
        changed
    }

    /// Apply one lookup outcome
    ///
    /// Outcomes for any handle other than the current one are discarded,
    /// whatever order they arrive in. Returns true if the view changed.
    pub fn apply_response(&mut self, response: SuggestionResponse) -> bool {
        let request_id = response.request_id();
        if !self.is_current(request_id) {
            log::debug!("Discarding response for superseded request {}", request_id);
            return false;
        }

        self.current = None;

        match response {
            SuggestionResponse::Loaded { items, .. } => {
                self.view.render(&items, &self.results);
                true
            }
            SuggestionResponse::Cancelled { .. } => false,
            SuggestionResponse::Failed { error, .. } => {
                // No user-facing error for lookups; the view stays as is
                log::debug!("Suggestion lookup {} failed: {}", request_id, error);
                false
            }
        }
    }

    /// Whether `request_id` belongs to the live current handle
    pub fn is_current(&self, request_id: u64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|handle| handle.id() == request_id && !handle.is_cancelled())
    }

    pub fn current_request_id(&self) -> Option<u64> {
        self.current.as_ref().map(RequestHandle::id)
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.current.is_some()
    }

    fn invalidate_current(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
            log::debug!("Cancelled suggestion request {}", handle.id());
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
