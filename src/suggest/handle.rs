use tokio_util::sync::CancellationToken;

/// Cancellation handle for one suggestion lookup
///
/// The controller holds at most one of these at a time. The fetch worker only
/// ever sees a clone of the token, never the handle itself.
#[derive(Debug)]
pub struct RequestHandle {
    id: u64,
    cancel: CancellationToken,
}

impl RequestHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            cancel: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Ask the transport to abort; results may still arrive afterwards
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
