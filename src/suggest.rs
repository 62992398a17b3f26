//! Live search suggestions
//!
//! Turns query edits into at most one honored lookup at a time. The
//! controller owns the current request handle; the fetch worker performs the
//! lookup off the UI thread; responses are applied only if they still belong
//! to the current handle.

mod controller;
mod handle;
mod query;
pub mod suggest_render;
mod view;
pub mod worker;

pub use controller::SuggestionController;
pub use handle::RequestHandle;
pub use query::{Query, SuggestionItem, SuggestionList, parse_suggestions};
pub use view::{SuggestionEntry, SuggestionView};
pub use worker::{FetchError, SuggestionClient, SuggestionRequest, SuggestionResponse};
