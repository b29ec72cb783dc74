use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};

impl App {
    /// Wait up to `timeout` for one terminal event, dispatch it, then tick
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key, now);
                }
                Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
                Event::Paste(text) => self.handle_paste_event(&text, now),
                _ => {}
            }
        }

        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key, now),
            Focus::SearchButton => self.handle_button_key(key),
            Focus::Background => {}
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if the key was consumed
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                self.dismiss();
                true
            }
            // Arrows only belong to the list while it can be navigated
            KeyCode::Up => self.highlight_previous(),
            KeyCode::Down => self.highlight_next(),
            KeyCode::Tab | KeyCode::BackTab => {
                let target = match self.focus {
                    Focus::Input => Focus::SearchButton,
                    Focus::SearchButton | Focus::Background => Focus::Input,
                };
                self.move_focus(target, now);
                true
            }
            _ => false,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Enter {
            self.submit();
            return;
        }

        if self.input.handle_key(key) {
            self.on_input_changed(now);
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.search();
        }
    }

    pub fn handle_paste_event(&mut self, text: &str, now: Instant) {
        if self.focus != Focus::Input {
            return;
        }
        if self.input.insert_text(text) {
            self.on_input_changed(now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
