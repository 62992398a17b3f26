//! Mouse click handling
//!
//! A click inside the suggestion dropdown selects the entry under the cursor
//! and stops there. A click on the notification overlay only dismisses it,
//! since the overlay may cover part of the dropdown. Any other click is an
//! outside interaction and clears the dropdown.

use ratatui::crossterm::event::MouseEvent;

use super::state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::Notification) => app.notification.dismiss(),
        Some(Region::InputField) | None => app.suggestions.on_outside_interaction(),
    }
}

/// Click contained within the dropdown
fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(index) = entry_index_at(app, mouse) else {
        // Border or padding of the dropdown: contained, but selects nothing
        return;
    };
    app.select_suggestion(index);
}

/// Index of the entry under the cursor within the dropdown, if any
pub(super) fn entry_index_at(app: &App, mouse: MouseEvent) -> Option<usize> {
    let area = app.layout_regions.suggestions?;

    let inner_x = area.x.saturating_add(1);
    let inner_y = area.y.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    if mouse.column < inner_x
        || mouse.column >= inner_x.saturating_add(inner_width)
        || mouse.row < inner_y
        || mouse.row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    app.suggestions.view.entry_at_row(mouse.row - inner_y)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
