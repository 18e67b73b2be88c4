//! Configuration validation logic
//!
//! Validation runs once, before the listening socket is bound. Any error
//! here is a fatal startup failure.

use crate::config::error::ConfigError;
use crate::config::settings::{BotConfig, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Characters that make a request path a route pattern or unmatchable
const RESERVED_PATH_CHARS: &[char] = &['{', '}', '*', ' ', '?', '#'];

/// Check that `path` is an absolute, literal route path.
///
/// Shared by settings validation and the `--request-path` argument so a path
/// accepted here never panics when the router registers it.
pub fn check_request_path(path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("Request path '{}' must start with '/'.", path));
    }

    if path.contains(RESERVED_PATH_CHARS) {
        return Err(format!(
            "Request path '{}' must be a literal path without '{{', '}}', '*', '?', '#' or spaces.",
            path
        ));
    }

    if path.split('/').any(|segment| segment.starts_with(':')) {
        return Err(format!(
            "Request path '{}' must not have a segment starting with ':'.",
            path
        ));
    }

    Ok(())
}

impl BotConfig {
    /// Validate bot configuration
    ///
    /// # Validation Rules
    /// - Token must not be empty
    /// - Chat must not be empty
    /// - API base must be an http(s) URL
    /// - Timeout, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::validation(
                "bot.token",
                "Bot token is required. Request one from @BotFather.",
            ));
        }

        if self.chat.trim().is_empty() {
            return Err(ConfigError::validation(
                "bot.chat",
                "Chat id is required. Use @channelname or the numeric chat id.",
            ));
        }

        if !self.api_base.starts_with("https://") && !self.api_base.starts_with("http://") {
            return Err(ConfigError::ValidationError {
                field: "bot.api_base".to_string(),
                message: format!(
                    "Invalid API base '{}'. Expected an http:// or https:// URL.",
                    self.api_base
                ),
            });
        }

        if self.timeout_seconds == Some(0) {
            return Err(ConfigError::validation(
                "bot.timeout_seconds",
                "Timeout must be greater than 0 seconds. Remove the key to disable the timeout.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bot.validate()?;

        if self.port == 0 {
            return Err(ConfigError::validation(
                "port",
                "Port is required. Set `port` in the configuration file or the PORT environment variable.",
            ));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "host",
                "Host cannot be empty.",
            ));
        }

        check_request_path(&self.request_path).map_err(|message| ConfigError::ValidationError {
            field: "request_path".to_string(),
            message,
        })?;

        self.logger.validate()?;

        Ok(())
    }
}
