use thiserror::Error;

use crate::navigation::NavigationError;
use crate::suggest::FetchError;

/// Custom error types for storefind
#[derive(Debug, Error)]
pub enum StorefindError {
    #[error(transparent)]
    Suggestions(#[from] FetchError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
