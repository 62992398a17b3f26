use crate::navigation::ResultsView;

use super::query::SuggestionItem;

/// One rendered suggestion with its navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub name: String,
    pub target: String,
}

/// The visible suggestion set
///
/// A projection of the last applied suggestion list. Rendering never issues
/// lookups; it only replaces or clears entries.
#[derive(Debug)]
pub struct SuggestionView {
    entries: Vec<SuggestionEntry>,
    /// Keyboard highlight
    selected: Option<usize>,
    /// Mouse hover highlight
    hovered: Option<usize>,
    max_visible: usize,
}

impl SuggestionView {
    /// A cap of zero is raised to one so applied results are never hidden
    pub fn new(max_visible: usize) -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            hovered: None,
            max_visible: max_visible.max(1),
        }
    }

    /// Replace the visible set with entries built from `list`, in list order
    pub fn render(&mut self, list: &[SuggestionItem], results: &ResultsView) {
        self.entries = list
            .iter()
            .take(self.max_visible)
            .map(|item| SuggestionEntry {
                name: item.name.clone(),
                target: results.url_for(&item.name),
            })
            .collect();
        self.selected = None;
        self.hovered = None;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.hovered = None;
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    /// An empty set is not shown at all
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected_entry(&self) -> Option<&SuggestionEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    pub fn entry(&self, index: usize) -> Option<&SuggestionEntry> {
        self.entries.get(index)
    }

    /// Move the highlight down, wrapping to the first entry
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the last entry
    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.entries.len());
    }

    /// Entry index for a row relative to the first entry line
    pub fn entry_at_row(&self, row: u16) -> Option<usize> {
        let index = row as usize;
        (index < self.entries.len()).then_some(index)
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
