use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly beneath `anchor`, clamped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x.saturating_add(x_offset);
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available_height = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset.saturating_mul(2))),
        height: height.min(available_height),
    }
}

/// Area in the top-right corner of `frame_area`, `margin` cells from the edges
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin.saturating_mul(2)));
    let popup_height = height.min(frame_area.height.saturating_sub(margin.saturating_mul(2)));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width.saturating_add(margin)),
        y: frame_area.y.saturating_add(margin),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
