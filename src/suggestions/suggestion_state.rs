use crate::fetch::Suggestion;
use crate::scroll::ScrollState;

/// Suggestion list, visibility flag and highlighted row
///
/// The highlight is `None` or a valid index into `suggestions`; every method
/// that changes the list resets it.
#[derive(Debug, Clone)]
pub struct SuggestionState {
    suggestions: Vec<Suggestion>,
    visible: bool,
    highlighted: Option<usize>,
    pub scroll: ScrollState,
}

impl SuggestionState {
    pub fn new(max_visible: u16) -> Self {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(0, max_visible);
        Self {
            suggestions: Vec::new(),
            visible: false,
            highlighted: None,
            scroll,
        }
    }

    /// Replace the list with a fresh fetch result and show it
    pub fn replace(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.visible = true;
        self.highlighted = None;
        self.scroll.reset();
        self.scroll
            .update_bounds(self.suggestions.len(), self.scroll.viewport_height);
    }

    /// Drop the list entirely (query became empty)
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.visible = false;
        self.highlighted = None;
        self.scroll.reset();
        self.scroll.update_bounds(0, self.scroll.viewport_height);
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// True when arrow keys should move the highlight
    pub fn is_navigable(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        self.highlighted.and_then(|i| self.suggestions.get(i))
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Move the highlight down one row, stopping at the last row
    ///
    /// Returns the newly highlighted index, or `None` when the list is not
    /// navigable.
    pub fn highlight_next(&mut self) -> Option<usize> {
        if !self.is_navigable() {
            return None;
        }
        let last = self.suggestions.len() - 1;
        let next = match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.highlight(Some(next));
        self.highlighted
    }

    /// Move the highlight up one row; from the first row it clears to `None`
    pub fn highlight_previous(&mut self) -> Option<usize> {
        if !self.is_navigable() {
            return None;
        }
        let previous = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.highlight(previous);
        self.highlighted
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
        if let Some(i) = index {
            self.scroll.ensure_visible(i);
        }
    }

    /// Record the rendered row capacity, keeping the highlight in view
    pub fn set_viewport_height(&mut self, height: u16) {
        self.scroll.update_bounds(self.suggestions.len(), height);
        if let Some(i) = self.highlighted {
            self.scroll.ensure_visible(i);
        }
    }

    /// Map a row within the rendered viewport to a list index
    pub fn index_at_row(&self, row: u16) -> Option<usize> {
        if row >= self.scroll.viewport_height {
            return None;
        }
        let index = self.scroll.offset as usize + row as usize;
        (index < self.suggestions.len()).then_some(index)
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
