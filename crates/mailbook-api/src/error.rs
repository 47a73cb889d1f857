//! Error types for the REST client.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the response body not read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code returned by the server.
        status: u16,
        /// Response body, usually a plain-text diagnostic.
        body: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The configured base URL parses but cannot anchor endpoint paths,
    /// e.g. `mailto:` or a missing-scheme typo like `localhost:8083`.
    #[error("Base URL must be http or https: {0}")]
    UnsupportedBase(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
