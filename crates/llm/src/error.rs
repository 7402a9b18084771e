//! Provider failures.

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between sending a prompt and holding
/// the generated text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or the raw body if it could not be decoded.
        message: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered but generated no text.
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// The provider could not be constructed, e.g. an API key that is not
    /// a valid header value.
    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        Self::Config(e.to_string())
    }
}
