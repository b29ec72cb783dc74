//! Mouse handling
//!
//! A click on a suggestion row first takes focus away from the input, the
//! same order a pointer click produces, then commits the row.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        let region = region_at(&self.layout, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => handle_click(self, region, now),
            MouseEventKind::ScrollDown if is_list(region) => self.suggestions.scroll.scroll_down(1),
            MouseEventKind::ScrollUp if is_list(region) => self.suggestions.scroll.scroll_up(1),
            _ => {}
        }
    }
}

/// Route a left click to the component under the pointer
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::Suggestions { row }) => {
            app.move_focus(Focus::Background, now);
            if let Some(index) = app.suggestions.index_at_row(row) {
                app.select_index(index);
            }
        }
        Some(Region::Input) => app.move_focus(Focus::Input, now),
        Some(Region::SearchButton) => {
            app.move_focus(Focus::SearchButton, now);
            app.search();
        }
        None => app.move_focus(Focus::Background, now),
    }
}

fn is_list(region: Option<Region>) -> bool {
    matches!(region, Some(Region::Suggestions { .. }))
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
