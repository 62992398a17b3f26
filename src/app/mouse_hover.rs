//! Mouse hover handling
//!
//! Highlights the suggestion under the cursor.

use ratatui::crossterm::event::MouseEvent;

use super::mouse_click::entry_index_at;
use super::state::App;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => {
            let index = entry_index_at(app, mouse);
            app.suggestions.view.set_hovered(index);
        }
        _ => {
            if app.suggestions.view.hovered().is_some() {
                app.suggestions.view.set_hovered(None);
            }
        }
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
