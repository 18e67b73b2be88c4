//! Body extractor accepting either JSON or URL-encoded form data.

use crate::error::{AppError, AppResult};
use axum::extract::{rejection::FormRejection, rejection::JsonRejection, Form, FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::de::DeserializeOwned;

/// Decodes `T` from a JSON or form body, picked by `Content-Type`.
///
/// Any other content type is rejected with `415 Unsupported Media Type`;
/// a body that fails to decode is rejected with `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

/// Body encodings understood by [`JsonOrForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

fn body_kind(content_type: &str) -> Option<BodyKind> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json")) {
        Some(BodyKind::Json)
    } else if essence == "application/x-www-form-urlencoded" {
        Some(BodyKind::Form)
    } else {
        None
    }
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        match body_kind(&content_type) {
            Some(BodyKind::Json) => {
                let Json(value) = Json::<T>::from_request(req, state).await?;
                Ok(JsonOrForm(value))
            }
            Some(BodyKind::Form) => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(JsonOrForm(value))
            }
            None => Err(AppError::UnsupportedMediaType {
                content_type: if content_type.is_empty() {
                    "<missing>".to_string()
                } else {
                    content_type
                },
            }),
        }
    }
}
