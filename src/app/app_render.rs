use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render::{self, SEARCH_BUTTON_WIDTH};
use crate::suggestions::suggestion_render;

const SEARCH_ROW_HEIGHT: u16 = 3;
const KEY_HINTS: &str = "↑/↓ navigate · Enter select/search · Tab focus · Esc close/quit";

impl App {
    /// Render the UI and record component regions for mouse handling
    pub fn render(&mut self, frame: &mut Frame) {
        let [search_row, _, status_area] = Layout::vertical([
            Constraint::Length(SEARCH_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [input_area, button_area] = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(SEARCH_BUTTON_WIDTH),
        ])
        .areas(search_row);

        self.layout.input = Some(input_area);
        self.layout.search_button = Some(button_area);

        input_render::render_field(self, frame, input_area);
        input_render::render_button(self, frame, button_area);
        self.render_status(frame, status_area);

        // Drawn last so it sits on top of everything below the input
        suggestion_render::render_popup(self, frame, input_area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match self.last_search() {
            Some(query) => Line::from(vec![
                Span::styled("Searching for: ", Style::default().fg(Color::Cyan)),
                Span::raw(query.to_string()),
            ]),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
