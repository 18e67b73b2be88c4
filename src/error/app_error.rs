use axum::http::StatusCode;
use thiserror::Error;

/// Per-request error type for the relay.
///
/// Startup failures use [`crate::config::ConfigError`] instead; everything
/// here is scoped to a single inbound notification. Upstream responses that
/// are not "OK" are not errors: their status is passed through as-is.
#[derive(Error, Debug)]
pub enum AppError {
    /// Shared secret missing or wrong
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Inbound body could not be decoded
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Inbound body is neither JSON nor form-encoded
    #[error("Unsupported media type: {content_type}")]
    UnsupportedMediaType { content_type: String },

    /// The chat API could not be reached (connect, DNS, TLS, timeout)
    #[error("Upstream {provider} unreachable")]
    Upstream {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl AppError {
    /// HTTP status the inbound caller sees for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
