use std::time::Instant;

use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::fetch::{FetchHandle, FetchRequest, FetchResponse};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::suggestions::SuggestionState;

/// Which component has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    SearchButton,
    /// Neither component (after clicking empty space)
    Background,
}

/// Search widget state
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionState,
    pub focus: Focus,
    /// Delays suggestion fetches until typing pauses
    pub debouncer: Debouncer,
    /// Text as typed when the debounce timer was last armed
    pub pending_query: Option<String>,
    /// Delays hiding the list after the input loses focus
    pub blur_timer: Debouncer,
    pub fetcher: Option<FetchHandle>,
    /// Id of the newest request; responses carrying any other id are stale
    pub request_id: u64,
    pub last_search: Option<String>,
    pub layout: LayoutRegions,
    pub max_visible: u16,
    pub should_quit: bool,
}

impl App {
    /// Create the widget; `fetcher` is the worker subscription it owns
    pub fn new(config: &Config, fetcher: Option<FetchHandle>) -> Self {
        let max_visible = config.display.max_visible.max(1);

        Self {
            input: InputState::new(&config.display.placeholder),
            suggestions: SuggestionState::new(max_visible),
            focus: Focus::Input,
            debouncer: Debouncer::new(config.timing.debounce_ms),
            pending_query: None,
            blur_timer: Debouncer::new(config.timing.blur_grace_ms),
            fetcher,
            request_id: 0,
            last_search: None,
            layout: LayoutRegions::new(),
            max_visible,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    fn has_query(&self) -> bool {
        !self.query().trim().is_empty()
    }

    /// Called after every edit of the input text
    ///
    /// Re-arms the debounce timer. An edit that leaves only whitespace drops
    /// the list right away.
    pub fn on_input_changed(&mut self, now: Instant) {
        if !self.has_query() {
            self.clear_suggestions();
        }
        self.pending_query = Some(self.query().to_string());
        self.debouncer.schedule(now);
    }

    /// Advance timers and collect finished fetches
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire_if_due(now) {
            self.fire_debounced();
        }
        if self.blur_timer.fire_if_due(now) {
            self.suggestions.hide();
        }
        self.poll_fetch_responses();
    }

    /// Fetch for the typed text, even if a preview has since replaced it
    fn fire_debounced(&mut self) {
        let query = self
            .pending_query
            .take()
            .unwrap_or_else(|| self.query().to_string());

        if query.trim().is_empty() {
            self.clear_suggestions();
        } else {
            self.request_suggestions(query);
        }
    }

    fn request_suggestions(&mut self, query: String) {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        match &self.fetcher {
            Some(fetcher) => {
                log::debug!("Requesting suggestions #{} for {:?}", request_id, query);
                if !fetcher.send(FetchRequest { request_id, query }) {
                    log::error!("Error fetching autocomplete suggestions: fetch worker stopped");
                }
            }
            None => log::warn!("No suggestion fetcher; skipping request for {:?}", query),
        }
    }

    /// Make every in-flight response stale
    fn invalidate_requests(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.invalidate_requests();
    }

    pub fn poll_fetch_responses(&mut self) {
        let Some(fetcher) = &self.fetcher else {
            return;
        };

        let mut responses = Vec::new();
        while let Some(response) = fetcher.try_recv() {
            responses.push(response);
        }

        for response in responses {
            self.handle_fetch_response(response);
        }
    }

    /// Apply a worker response if it answers the newest request
    ///
    /// Failures are logged and leave the current list untouched.
    pub fn handle_fetch_response(&mut self, response: FetchResponse) {
        if response.request_id != self.request_id {
            log::debug!(
                "Discarding stale response #{} (latest #{})",
                response.request_id,
                self.request_id
            );
            return;
        }

        match response.result {
            Ok(suggestions) => {
                log::debug!(
                    "Received {} suggestions for #{}",
                    suggestions.len(),
                    response.request_id
                );
                self.suggestions.replace(suggestions);
            }
            Err(e) => log::error!("Error fetching autocomplete suggestions: {}", e),
        }
    }

    /// ArrowDown; returns false when the list is not navigable
    pub fn highlight_next(&mut self) -> bool {
        if !self.suggestions.is_navigable() {
            return false;
        }
        if self.suggestions.highlight_next().is_some() {
            self.preview_highlighted();
        }
        true
    }

    /// ArrowUp; returns false when the list is not navigable
    pub fn highlight_previous(&mut self) -> bool {
        if !self.suggestions.is_navigable() {
            return false;
        }
        if self.suggestions.highlight_previous().is_some() {
            self.preview_highlighted();
        }
        true
    }

    /// Show the highlighted title in the input without fetching for it
    fn preview_highlighted(&mut self) {
        if let Some(title) = self
            .suggestions
            .highlighted_suggestion()
            .map(|s| s.title.clone())
        {
            self.input.set_query(&title);
        }
    }

    /// Commit a suggestion: it becomes the query and the list closes
    pub fn select_suggestion(&mut self, title: &str) {
        log::debug!("Selected suggestion {:?}", title);
        self.input.set_query(title);
        self.suggestions.hide();
        self.suggestions.reset_highlight();
        self.debouncer.cancel();
        self.pending_query = None;
        self.blur_timer.cancel();
        self.invalidate_requests();
        self.focus = Focus::Input;
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(title) = self
            .suggestions
            .suggestions()
            .get(index)
            .map(|s| s.title.clone())
        {
            self.select_suggestion(&title);
        }
    }

    /// Enter in the input: commit the highlighted row, or search
    pub fn submit(&mut self) {
        match self.suggestions.highlighted() {
            Some(index) => self.select_index(index),
            None => self.search(),
        }
    }

    /// Run the search action with the query exactly as typed
    pub fn search(&mut self) {
        let query = self.query().to_string();
        log::info!("Searching for: {}", query);
        self.last_search = Some(query);
    }

    /// Input gains focus: re-show the existing list if there is a query
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.blur_timer.cancel();
        let show = self.has_query();
        self.suggestions.set_visible(show);
    }

    /// Move focus to `target`; leaving the input starts the blur grace delay
    pub fn move_focus(&mut self, target: Focus, now: Instant) {
        if target == Focus::Input {
            if self.focus != Focus::Input {
                self.focus_input();
            }
            return;
        }

        if self.focus == Focus::Input {
            self.blur_timer.schedule(now);
        }
        self.focus = target;
    }

    /// Esc: close an open list, otherwise quit
    pub fn dismiss(&mut self) {
        if self.suggestions.is_visible() {
            self.suggestions.hide();
            self.suggestions.reset_highlight();
        } else {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
