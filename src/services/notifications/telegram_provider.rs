//! Telegram Bot API notification provider implementation.
//!
//! Posts to `sendMessage` using the global `HTTP_CLIENT`.
//!
//! Bot API Reference: https://core.telegram.org/bots/api#sendmessage

use super::provider::{DeliveryResult, NotificationProvider, OutboundMessage};
use crate::config::ServiceConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

/// Telegram notification provider
///
/// Sends one `sendMessage` call per message. A response with any status
/// is reported back as a [`DeliveryResult`]; only transport failures
/// become errors.
///
/// # Example
/// ```ignore
/// let provider = TelegramProvider::new(&service_config);
/// let result = provider.send(&OutboundMessage::markdown_v2("@status", "hi")).await?;
/// ```
#[derive(Clone)]
pub struct TelegramProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl TelegramProvider {
    /// Creates a provider backed by the global HTTP client
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), config)
    }

    /// Creates a provider with a caller-supplied HTTP client
    pub fn with_client(client: reqwest::Client, config: &ServiceConfig) -> Self {
        Self {
            client,
            endpoint: Self::build_endpoint(config.api_base(), config.bot_token()),
            timeout: config.delivery_timeout(),
        }
    }

    /// `sendMessage` URL for a bot token
    pub fn build_endpoint(api_base: &str, token: &str) -> String {
        format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token)
    }
}

#[async_trait]
impl NotificationProvider for TelegramProvider {
    async fn send(&self, message: &OutboundMessage) -> AppResult<DeliveryResult> {
        let start = Instant::now();

        let mut request = self.client.post(&self.endpoint).json(message);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        // The URL embeds the bot token, so strip it from errors before they
        // reach logs or callers.
        let response = request.send().await.map_err(|e| {
            let source = e.without_url();
            tracing::error!(
                provider = self.name(),
                error = %source,
                timeout = source.is_timeout(),
                connect = source.is_connect(),
                "Failed to reach chat API"
            );
            AppError::Upstream {
                provider: self.name(),
                source,
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response.text().await.ok();
        let duration_ms = start.elapsed().as_millis() as u64;
        let success = status == StatusCode::OK;

        if success {
            tracing::debug!(
                provider = self.name(),
                status = status.as_u16(),
                duration_ms,
                "Message delivered"
            );
        } else {
            tracing::error!(
                provider = self.name(),
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or("unknown"),
                headers = ?headers,
                body = response_text.as_deref().unwrap_or(""),
                duration_ms,
                "Chat API did not answer OK"
            );
        }

        Ok(DeliveryResult {
            success,
            status_code: status.as_u16(),
            response: response_text,
            duration_ms,
        })
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
