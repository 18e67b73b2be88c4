//! Core notification provider trait and types.
//!
//! This module provides the abstraction for delivering a rendered message
//! to a chat service.

use crate::error::AppResult;
use async_trait::async_trait;
use serde::Serialize;

/// Markup dialect understood by the chat renderer
pub const PARSE_MODE_MARKDOWN_V2: &str = "MarkdownV2";

/// Message to be sent via notification provider
///
/// Serializes to the Bot API `sendMessage` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Target chat (`@channel` or numeric id)
    pub chat_id: String,
    /// Text, already escaped for `parse_mode`
    pub text: String,
    /// Markup dialect of `text`
    pub parse_mode: &'static str,
    /// Suppress link previews
    pub disable_web_page_preview: bool,
}

impl OutboundMessage {
    /// Create a MarkdownV2 message with link previews disabled
    pub fn markdown_v2(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: PARSE_MODE_MARKDOWN_V2,
            disable_web_page_preview: true,
        }
    }
}

/// Result of a delivery attempt that reached the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// Whether the service answered `200 OK`
    pub success: bool,
    /// HTTP status returned by the service
    pub status_code: u16,
    /// Response body
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification providers
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends a message once, without retrying
    ///
    /// # Returns
    /// `Ok` with the service's status whenever a response arrived, whatever
    /// that status was; `Err` only when no response could be obtained.
    async fn send(&self, message: &OutboundMessage) -> AppResult<DeliveryResult>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_v2_message() {
        let message = OutboundMessage::markdown_v2("@status", "hello");
        assert_eq!(message.chat_id, "@status");
        assert_eq!(message.text, "hello");
        assert_eq!(message.parse_mode, "MarkdownV2");
        assert!(message.disable_web_page_preview);
    }

    #[test]
    fn test_message_body_shape() {
        let message = OutboundMessage::markdown_v2("-100123", r"a\.b");
        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "chat_id": "-100123",
                "text": "a\\.b",
                "parse_mode": "MarkdownV2",
                "disable_web_page_preview": true,
            })
        );
    }
}
