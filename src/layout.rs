//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn on the last frame, and
//! `region_at()` determines which component is at a given screen position.

use ratatui::layout::{Position, Rect};

/// A clickable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Suggestions,
    Notification,
}

/// Component rectangles from the last rendered frame
#[derive(Debug, Default, Clone)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub notification: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all regions (called before each frame is drawn)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Find the top-most region containing the given screen cell
///
/// Overlays win over what they cover: notification, then the suggestion
/// dropdown, then the input field.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

    if hit(regions.notification) {
        Some(Region::Notification)
    } else if hit(regions.suggestions) {
        Some(Region::Suggestions)
    } else if hit(regions.input_field) {
        Some(Region::InputField)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
