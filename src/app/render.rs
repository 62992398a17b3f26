use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::notification::render_notification;
use crate::suggest::suggest_render;

const INPUT_HEIGHT: u16 = 3;
const HINT_BAR_HEIGHT: u16 = 1;
const HINT_TEXT: &str = " Enter: search  Up/Down: select  Ctrl+V: voice  Esc: close ";

impl App {
    /// Render the UI and record component regions for mouse hit-testing
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [input_area, _body_area, hint_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .areas(frame.area());

        self.render_input_field(frame, input_area);
        self.layout_regions.input_field = Some(input_area);

        render_hint_bar(frame, hint_area);

        // Overlays last so they draw on top
        self.layout_regions.suggestions =
            suggest_render::render_popup(&self.suggestions.view, frame, input_area);
        self.layout_regions.notification = render_notification(frame, &self.notification);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan));

        if self.voice.is_listening() {
            block = block.title_top(
                Line::from(Span::styled(" listening ", Style::default().fg(Color::Red)))
                    .alignment(Alignment::Right),
            );
        }

        self.input.textarea.set_block(block);
        frame.render_widget(&self.input.textarea, area);
    }
}

fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(HINT_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
