use thiserror::Error;

/// Startup errors for searchbar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchBarError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid suggestion service URL '{0}'")]
    InvalidServiceUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SearchBarError {
    fn from(err: std::io::Error) -> Self {
        SearchBarError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
