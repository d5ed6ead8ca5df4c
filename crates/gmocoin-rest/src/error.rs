//! Error types for REST API operations

use crate::types::ApiMessage;

/// Errors that can occur during REST API operations
///
/// The three families a caller branches on:
/// - configuration (`MissingApiKey` / `MissingApiSecret`) - fix the setup,
///   raised before any network I/O
/// - application (`Api`) - the exchange understood and rejected the request
/// - transport (`Http` / `Timeout` / `Status`) - the exchange was never
///   reached, or answered outside the envelope protocol
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed below the envelope layer
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered outside the 2xx range
    #[error("HTTP status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Raw response body
        body: String,
    },

    /// The exchange rejected the request
    #[error("API error {code}: {message}")]
    Api {
        /// GMO Coin message code (e.g., "ERR-5106")
        code: String,
        /// Human-readable message text
        message: String,
    },

    /// Private endpoint called without an API key configured
    #[error("API key is not configured")]
    MissingApiKey,

    /// Private endpoint called without an API secret configured
    #[error("API secret is not configured")]
    MissingApiSecret,

    /// Response did not match the expected envelope shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading or validation failed
    #[error(transparent)]
    Auth(#[from] gmocoin_auth::AuthError),
}

impl RestError {
    /// Create an API error from the envelope's message list
    ///
    /// Only the first message is surfaced. The exchange may append
    /// secondary messages, but callers branch on a single failure; this
    /// first-message-wins behavior is part of the client's contract.
    pub fn from_api_messages(messages: Vec<ApiMessage>) -> Self {
        match messages.into_iter().next() {
            Some(message) => Self::Api {
                code: message.message_code,
                message: message.message_string,
            },
            None => Self::Parse("Empty message list in error response".to_string()),
        }
    }

    /// Check if this error came from the network rather than the exchange
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::Status { .. })
    }

    /// Check if this error means credentials are missing or unusable
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::MissingApiSecret | Self::Auth(_)
        )
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
