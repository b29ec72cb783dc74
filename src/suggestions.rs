//! Suggestion dropdown
//!
//! Holds the fetched suggestion list together with its visibility, keyboard
//! highlight and scroll position, and renders it below the input.

pub mod suggestion_render;
mod suggestion_state;

pub use suggestion_state::SuggestionState;
