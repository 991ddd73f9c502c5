//! Error types for the interpretation client.

/// Errors from an interpretation request.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// No API key is configured.
    #[error("missing API key: set SILICONFLOW_API_KEY")]
    MissingApiKey,

    /// The upstream service did not answer within the configured timeout.
    #[error("interpretation service timed out, please retry later")]
    Timeout,

    /// The upstream service answered with a non-success status.
    #[error("interpretation service returned {status}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The request could not be sent or the response not received.
    #[error("interpretation request failed: {0}")]
    Transport(String),

    /// The upstream response was not valid JSON.
    #[error("invalid response from interpretation service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for InterpretError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Convenience result type for interpretation requests.
pub type InterpretResult<T> = Result<T, InterpretError>;
