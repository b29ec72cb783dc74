//! Suggestion fetching
//!
//! The UI thread never blocks on the network. Requests go to a worker thread
//! over a channel and responses come back tagged with the request id they
//! answer, so the widget can drop responses that are no longer current.

mod client;
mod error;
mod suggestion;
mod worker;

pub use client::SuggestClient;
pub use error::FetchError;
pub use suggestion::{Suggestion, parse_suggestions};
pub use worker::{FetchHandle, FetchRequest, FetchResponse, spawn_worker};
