//! Notification service for inbound monitor alerts.
//!
//! Gates each alert on the shared secret, renders it and relays it through a
//! provider, reporting the provider's status back to the caller.

use super::message::AlertEvent;
use super::provider::{NotificationProvider, OutboundMessage};
use crate::config::ServiceConfig;
use crate::error::{AppError, AppResult};
use crate::services::auth::verify_password;
use axum::http::StatusCode;
use std::sync::Arc;

/// Notification service relaying alerts to the configured chat
#[derive(Clone)]
pub struct NotificationService {
    config: Arc<ServiceConfig>,
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `config` - Shared runtime configuration
    /// * `provider` - Provider used to deliver rendered messages
    pub fn new(config: Arc<ServiceConfig>, provider: Arc<dyn NotificationProvider>) -> Self {
        Self { config, provider }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Checks the password and relays one alert.
    ///
    /// Exactly one delivery attempt is made for an accepted alert and none
    /// for a rejected one.
    ///
    /// # Returns
    /// The chat service's HTTP status, whatever it was
    pub async fn handle(&self, password: Option<&str>, event: AlertEvent) -> AppResult<StatusCode> {
        if !verify_password(self.config.shared_secret(), password) {
            tracing::warn!(
                monitor = %event.monitor_name,
                password_present = password.is_some_and(|p| !p.is_empty()),
                "Rejected alert with wrong password"
            );
            return Err(AppError::Unauthorized {
                message: "password mismatch".to_string(),
            });
        }

        let message = OutboundMessage::markdown_v2(self.config.chat_id(), event.compose());

        tracing::info!(
            monitor = %event.monitor_name,
            alert_type = %event.alert_type,
            duration_seconds = event.duration_seconds,
            provider = self.provider.name(),
            "Relaying alert"
        );

        let result = self.provider.send(&message).await?;

        tracing::info!(
            status = result.status_code,
            success = result.success,
            duration_ms = result.duration_ms,
            "Alert relayed"
        );

        Ok(StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::BAD_GATEWAY))
    }
}
