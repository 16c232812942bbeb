use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching the menu.
///
/// A category missing from the document is not one of them: sources
/// return an empty list for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure (DNS, connection refused, reset).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a menu document.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Returns the name of the source, used in logs.
    fn name(&self) -> &str;

    /// Fetches the item names listed under `category`.
    async fn fetch(&self, category: &str) -> Result<Vec<String>, FetchError>;
}
