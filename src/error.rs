//! Load errors - everything that can stop the country list from arriving

use thiserror::Error;

/// Why the country list could not be loaded.
///
/// All variants collapse into a single display string; the UI never
/// branches on the kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Failed to fetch: {0}")]
    Http(u16),

    /// The body was not a JSON array of country records
    #[error("{0}")]
    Parse(String),
}

impl LoadError {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            LoadError::Network(format!("Connection failed: {}", err))
        } else {
            LoadError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(format!("Invalid response body: {}", err))
    }
}
