use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationState, NotificationType};
use crate::widgets::popup;

const MAX_NOTIFICATION_WIDTH: u16 = 56;
const MIN_NOTIFICATION_WIDTH: u16 = 16;
const NOTIFICATION_MARGIN: u16 = 1;
// Border plus one column of padding on each side
const NOTIFICATION_CHROME: u16 = 4;

/// Render the current notification in the top-right corner
///
/// Returns the area drawn, if any.
pub fn render_notification(frame: &mut Frame, state: &NotificationState) -> Option<Rect> {
    let notification = state.current()?;
    let frame_area = frame.area();

    let text_width = u16::try_from(notification.message.width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(NOTIFICATION_CHROME)
        .clamp(MIN_NOTIFICATION_WIDTH, MAX_NOTIFICATION_WIDTH)
        .min(frame_area.width);
    let inner_width = width.saturating_sub(NOTIFICATION_CHROME) as usize;
    let height = u16::try_from(wrapped_line_count(&notification.message, inner_width))
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let area = popup::top_right_popup(frame_area, width, height, NOTIFICATION_MARGIN);
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let border_color = match notification.notification_type {
        NotificationType::Info => Color::Cyan,
        NotificationType::Warning => Color::Yellow,
    };

    let paragraph = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(Color::Black)),
        );

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);

    Some(area)
}

/// Lines needed to word-wrap `text` into `width` columns
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut lines = 1;
    let mut line_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if line_width == 0 {
            word_width
        } else {
            line_width + 1 + word_width
        };

        if needed <= width {
            line_width = needed;
        } else {
            if line_width > 0 {
                lines += 1;
            }
            // Words longer than a line are broken across lines
            lines += word_width.div_ceil(width).saturating_sub(1);
            line_width = match word_width % width {
                0 => width,
                rest => rest,
            };
        }
    }
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
