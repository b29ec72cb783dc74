use ratatui::layout::Rect;

/// Clickable components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    SearchButton,
    /// Suggestion list; `row` is relative to the first list row inside the border
    Suggestions { row: u16 },
}

/// Screen areas from the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub search_button: Option<Rect>,
    /// Only set while the list is drawn
    pub suggestions: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }
}
