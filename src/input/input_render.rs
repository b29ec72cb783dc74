//! Input field and Search button rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

pub const SEARCH_BUTTON_WIDTH: u16 = 12;

/// Render the query input
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Input {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor when the input is not focused
    let cursor_style = if app.focus == Focus::Input {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
}

/// Render the Search button to the right of the input
pub fn render_button(app: &App, frame: &mut Frame, area: Rect) {
    let (label_style, border_color) = if app.focus == Focus::SearchButton {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Color::Cyan,
        )
    } else {
        (Style::default().fg(Color::White), Color::DarkGray)
    };

    let button = Paragraph::new(Line::from(Span::styled(" Search ", label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(button, area);
}
