//! API Errors

use thiserror::Error;

/// Failure of a request to the config resource or the quotes service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotesError {
    /// Transport failure or an URL that could not be built
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    /// Body was not JSON of the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for QuotesError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => QuotesError::Status(status.as_u16()),
            None => QuotesError::Request(e.to_string()),
        }
    }
}
