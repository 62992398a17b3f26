use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click::handle_click;
use super::mouse_hover::handle_hover;
use super::state::App;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        // Everything else edits the query field
        if self.input.textarea.input(key) {
            self.on_query_edited();
        }
    }

    /// Handle keys that are not text editing
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+C: Exit without navigating
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }

            // Esc: close suggestions first, exit when nothing is open
            KeyCode::Esc => {
                if self.suggestions.view.is_visible() {
                    self.suggestions.view.clear();
                } else {
                    self.should_quit = true;
                }
                true
            }

            // Enter (and its control-key aliases) submits; never a newline
            KeyCode::Enter => {
                self.submit();
                true
            }
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {
                self.submit();
                true
            }

            KeyCode::Down => {
                self.suggestions.view.select_next();
                true
            }
            KeyCode::Up => {
                self.suggestions.view.select_previous();
                true
            }

            // Voice input
            KeyCode::F(2) => {
                self.activate_voice();
                true
            }
            KeyCode::Char('v') if ctrl => {
                self.activate_voice();
                true
            }

            _ => false,
        }
    }

    /// Route mouse events by the region under the cursor
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => handle_click(self, region, mouse),
            MouseEventKind::Moved => handle_hover(self, region, mouse),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
