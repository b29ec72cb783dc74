//! Suggestion popup rendering
//!
//! Draws the visible window of the suggestion list directly below the input
//! and records its area for mouse hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const HIGHLIGHT_MARKER: &str = "► ";
const ROW_MARKER: &str = "  ";
const MARKER_WIDTH: usize = 2;

/// Render the suggestion popup below the input field
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) {
    app.layout.suggestions = None;

    let count = app.suggestions.suggestions().len();
    if !app.suggestions.is_visible() || count == 0 {
        return;
    }

    let rows = (count as u16).min(app.max_visible);
    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        input_area.width,
        rows + POPUP_BORDER_HEIGHT,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let viewport_height = popup_area.height - POPUP_BORDER_HEIGHT;
    app.suggestions.set_viewport_height(viewport_height);
    app.layout.suggestions = Some(popup_area);

    let inner_width = popup_area.width.saturating_sub(POPUP_BORDER_WIDTH) as usize;
    let text_width = inner_width.saturating_sub(MARKER_WIDTH);
    let offset = app.suggestions.scroll.offset as usize;
    let highlighted = app.suggestions.highlighted();

    let items: Vec<ListItem> = app
        .suggestions
        .suggestions()
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport_height as usize)
        .map(|(i, suggestion)| {
            let title = truncate_to_width(&suggestion.title, text_width);
            let padding = " ".repeat(text_width.saturating_sub(title.width()));

            let line = if highlighted == Some(i) {
                Line::from(Span::styled(
                    format!("{}{}{}", HIGHLIGHT_MARKER, title, padding),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}{}", ROW_MARKER, title, padding),
                    Style::default().fg(Color::White),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Suggestions ({}) ", count))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
