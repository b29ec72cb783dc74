use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder.to_string());
        textarea.set_placeholder_style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    /// Replace the whole query, leaving the cursor at the end
    pub fn set_query(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed a key to the text editor; returns true if the text changed
    ///
    /// Keys that would break the line are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if breaks_line(key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor; returns true if the text changed
    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

fn breaks_line(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Line breaks become spaces; everything else is kept as given
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
