//! Immutable runtime configuration shared by the request pipeline.

use std::fmt;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Runtime view of the validated settings.
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    shared_secret: Option<String>,
    bot_token: String,
    chat_id: String,
    api_base: String,
    delivery_timeout: Option<Duration>,
    request_path: String,
}

impl ServiceConfig {
    /// Validate `settings` and build the runtime configuration from them.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let shared_secret = Some(settings.password.clone()).filter(|s| !s.is_empty());

        Ok(Self {
            shared_secret,
            bot_token: settings.bot.token.trim().to_string(),
            chat_id: settings.bot.chat.trim().to_string(),
            api_base: settings.bot.api_base.trim_end_matches('/').to_string(),
            delivery_timeout: settings.bot.timeout_seconds.map(Duration::from_secs),
            request_path: settings.request_path.clone(),
        })
    }

    /// Configured shared secret; `None` means every request is accepted
    pub fn shared_secret(&self) -> Option<&str> {
        self.shared_secret.as_deref()
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Bot API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn delivery_timeout(&self) -> Option<Duration> {
        self.delivery_timeout
    }

    pub fn request_path(&self) -> &str {
        &self.request_path
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "[REDACTED]"))
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("delivery_timeout", &self.delivery_timeout)
            .field("request_path", &self.request_path)
            .finish()
    }
}
