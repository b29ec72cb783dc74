pub mod app;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod fetch;
pub mod input;
pub mod layout;
pub mod logging;
pub mod scroll;
pub mod suggestions;
pub mod widgets;
