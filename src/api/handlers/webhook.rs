//! Inbound webhook handler.

use crate::api::dto::NotificationPayload;
use crate::api::extract::JsonOrForm;
use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// POST `<request_path>` - relay one monitor notification.
///
/// # Responses
/// - the chat API's status, passed through
/// - `401 Unauthorized` - password mismatch
/// - `400`/`415` - undecodable body
/// - `502 Bad Gateway` - chat API unreachable
///
/// Every response has an empty body.
pub async fn receive_notification(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<NotificationPayload>,
) -> AppResult<StatusCode> {
    tracing::debug!(payload = ?payload, "Notification received");

    let (password, event) = payload.into_parts();
    state
        .services
        .notifications
        .handle(password.as_deref(), event)
        .await
}
