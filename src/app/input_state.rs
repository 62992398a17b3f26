use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Search field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create a new InputState
    pub fn new() -> Self {
        Self {
            textarea: create_textarea(),
        }
    }

    /// Get the current query text (untrimmed)
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the field content, leaving the cursor at the end
    pub fn set_query(&mut self, text: &str) {
        let mut textarea = create_textarea();
        textarea.insert_str(text);
        self.textarea = textarea;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a TextArea configured for single-line search input
fn create_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Search products...");

    textarea
}
