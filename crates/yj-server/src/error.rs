//! Error types for the HTTP service.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use yj_engine::EngineError;
use yj_interpret::InterpretError;

/// Errors raised while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Reading a file or binding a socket failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// The interpretation client could not be built.
    #[error("{0}")]
    Interpret(#[from] InterpretError),
}

/// Convenience result type for server setup.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors returned from request handlers, rendered as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A hexagram engine error.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// An interpretation service error.
    #[error("{0}")]
    Interpret(#[from] InterpretError),

    /// The request was well-formed JSON but semantically invalid.
    #[error("{0}")]
    BadRequest(String),

    /// The path or body could not be extracted.
    #[error("{detail}")]
    Rejected {
        /// Status chosen by the extractor (400, 415 or 422).
        status: StatusCode,
        /// The extractor's explanation.
        detail: String,
    },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Engine(EngineError::OutOfRangeOrdinal(_)) => StatusCode::BAD_REQUEST,
            Self::Engine(EngineError::ReferenceDataUnavailable { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Interpret(InterpretError::MissingApiKey) => StatusCode::BAD_REQUEST,
            Self::Interpret(InterpretError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Interpret(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "{self}");
        } else {
            tracing::debug!(%status, "{self}");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
