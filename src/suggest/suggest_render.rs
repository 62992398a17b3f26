//! Suggestion dropdown rendering
//!
//! Draws the visible suggestion set directly beneath the search field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::view::SuggestionView;
use crate::widgets::popup;

// Dropdown display constants
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const ELLIPSIS: char = '…';

/// Render the dropdown below `input_area`
///
/// Returns the area drawn, or None when nothing is shown (empty view or no
/// room below the input).
pub fn render_popup(view: &SuggestionView, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    if !view.is_visible() {
        return None;
    }

    let popup_height = u16::try_from(view.entries().len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);
    let popup_area =
        popup::popup_below_anchor(input_area, frame.area(), input_area.width, popup_height, 0);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let text_width = popup_area.width.saturating_sub(POPUP_BORDER_WIDTH) as usize;

    let items: Vec<ListItem> = view
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if view.selected() == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if view.hovered() == Some(i) {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let name = truncate_to_width(&entry.name, text_width);
            ListItem::new(Line::from(Span::styled(name, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    popup::clear_area(frame, popup_area);
    frame.render_widget(list, popup_area);

    Some(popup_area)
}

/// Fit `text` into `max_width` display columns, marking cut text with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - ELLIPSIS.width().unwrap_or(1);
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > limit {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
