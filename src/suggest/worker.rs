//! Suggestion fetch worker
//!
//! Handles suggestion lookups on a background thread so typing never waits on
//! the network. The thread drives a single-threaded tokio runtime; every
//! request races its HTTP call against its cancellation token and reports
//! exactly one outcome, tagged with the request id, back to the UI thread.

use std::sync::mpsc::Sender;

use reqwest::Url;
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::query::{SuggestionList, parse_suggestions};

/// Query parameter the lookup endpoint reads the query from
const QUERY_PARAM: &str = "q";

/// Errors that can occur during a suggestion lookup
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid suggestion endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Connection or transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Suggestion endpoint returned HTTP {0}")]
    Status(u16),

    /// Body was not a list of suggestions
    #[error("Parse error: {0}")]
    Parse(String),

    /// Superseded by a newer query before completing
    #[error("Request cancelled")]
    Cancelled,
}

/// Request messages sent to the fetch worker
#[derive(Debug)]
pub struct SuggestionRequest {
    pub query: String,
    /// Id of the handle this lookup belongs to
    pub request_id: u64,
    pub cancel: CancellationToken,
}

/// Outcome messages received from the fetch worker
#[derive(Debug)]
pub enum SuggestionResponse {
    Loaded {
        request_id: u64,
        items: SuggestionList,
    },
    Cancelled {
        request_id: u64,
    },
    Failed {
        request_id: u64,
        error: FetchError,
    },
}

impl SuggestionResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestionResponse::Loaded { request_id, .. }
            | SuggestionResponse::Cancelled { request_id }
            | SuggestionResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// HTTP client for the suggestion lookup endpoint
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SuggestionClient {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// Lookup URL for a query, e.g. `.../api/search_suggestions?q=red+shoes`
    pub fn lookup_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, query);
        url
    }

    /// Perform one lookup
    pub async fn fetch(&self, query: &str) -> Result<SuggestionList, FetchError> {
        let response = self
            .http
            .get(self.lookup_url(query))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Perform one lookup, abandoning it as soon as `cancel` fires
    pub async fn fetch_with_cancel(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<SuggestionList, FetchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.fetch(query) => result,
        }
    }
}

/// Spawn the fetch worker thread
///
/// Returns the sender used to submit lookups. The worker exits once every
/// sender has been dropped.
pub fn spawn_worker(
    client: SuggestionClient,
    response_tx: Sender<SuggestionResponse>,
) -> UnboundedSender<SuggestionRequest> {
    let (request_tx, request_rx) = unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::debug!("Suggestion worker runtime failed to start: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(client, request_rx, response_tx));
    });

    request_tx
}

/// Accept requests until the channel closes; lookups run concurrently
async fn worker_loop(
    client: SuggestionClient,
    mut request_rx: UnboundedReceiver<SuggestionRequest>,
    response_tx: Sender<SuggestionResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            handle_request(&client, request, &response_tx).await;
        });
    }

    log::debug!("Suggestion worker shutting down");
}

async fn handle_request(
    client: &SuggestionClient,
    request: SuggestionRequest,
    response_tx: &Sender<SuggestionResponse>,
) {
    let SuggestionRequest {
        query,
        request_id,
        cancel,
    } = request;

    let response = match client.fetch_with_cancel(&query, &cancel).await {
        Ok(items) => SuggestionResponse::Loaded { request_id, items },
        Err(FetchError::Cancelled) => {
            log::debug!("Cancelled suggestion request {}", request_id);
            SuggestionResponse::Cancelled { request_id }
        }
        Err(error) => {
            log::debug!("Suggestion request {} failed: {}", request_id, error);
            SuggestionResponse::Failed { request_id, error }
        }
    };

    // UI thread gone; nothing left to report to
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
