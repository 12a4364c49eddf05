/*
[INPUT]:  Error sources (HTTP, API, serialization, configuration)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Naver Cloud adapter
#[derive(Error, Debug)]
pub enum NcloudError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server replied with a status code the endpoint does not expect
    #[error("request failed with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// API returned an in-band error payload
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// API accepted the request but reported a non-success status field
    #[error("request rejected with status {code}: {name}")]
    Status { code: String, name: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A query parameter was missing or malformed
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Recipient type string did not match any known type
    #[error("unknown recipient type: {0}")]
    UnknownRecipientType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NcloudError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            NcloudError::Http(_) => true,
            NcloudError::UnexpectedStatus { status, .. } => status.is_server_error(),
            _ => false,
        }
    }

    /// Create an in-band API error from a code and message
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        NcloudError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Naver Cloud operations
pub type Result<T> = std::result::Result<T, NcloudError>;
