//! Error handler for converting AppError to HTTP responses.
//!
//! The caller only ever sees a bare status code. Diagnostic detail goes to
//! the log: client errors at `warn`, server-side failures at `error`.

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an empty-bodied HTTP response.
    ///
    /// # Status Code Mapping
    /// - Unauthorized → 401 UNAUTHORIZED
    /// - BadRequest → 400 BAD_REQUEST
    /// - UnsupportedMediaType → 415 UNSUPPORTED_MEDIA_TYPE
    /// - Upstream → 502 BAD_GATEWAY
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        status.into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON payload: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
            JsonRejection::BytesRejection(_) => "Failed to read request body".to_string(),
            other => other.body_text(),
        };
        AppError::BadRequest { message }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        let message = match &rejection {
            FormRejection::FailedToDeserializeFormBody(err) => {
                format!("Invalid form payload: {}", err.body_text())
            }
            other => other.body_text(),
        };
        AppError::BadRequest { message }
    }
}

/// Status returned when the fallback route is hit
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn into_parts(error: AppError) -> (StatusCode, usize) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.len())
    }

    #[tokio::test]
    async fn test_unauthorized_is_empty_401() {
        let (status, body_len) = into_parts(AppError::Unauthorized {
            message: "password mismatch".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body_len, 0);
    }

    #[tokio::test]
    async fn test_bad_request_is_empty_400() {
        let (status, body_len) = into_parts(AppError::BadRequest {
            message: "invalid duration".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body_len, 0);
    }

    #[tokio::test]
    async fn test_unsupported_media_type() {
        let (status, body_len) = into_parts(AppError::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body_len, 0);
    }
}
