use thiserror::Error;

/// Why a suggestion request failed
///
/// All variants are handled the same way: logged and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("Suggestion service returned HTTP {code}")]
    Status { code: u16 },

    /// Body was not an array of objects with a string `title`
    #[error("Malformed suggestion payload: {0}")]
    Malformed(String),
}
