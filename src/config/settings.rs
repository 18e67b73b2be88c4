//! Configuration settings structures for uptime-relay
//!
//! The top-level keys mirror the legacy `config.json` layout
//! (`password`, `bot.token`, `bot.chat`, `port`) so existing deployments
//! keep working; everything else is optional.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_host() -> String {
    "localhost".to_string()
}

fn default_request_path() -> String {
    "/".to_string()
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Bot Configuration
// ============================================================================

/// Telegram bot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot token issued by BotFather
    #[serde(default)]
    pub token: String,

    /// Target chat, either `@channelname` or a numeric id
    #[serde(default)]
    pub chat: String,

    /// Bot API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Outbound request timeout in seconds; unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            chat: String::new(),
            api_base: default_api_base(),
            timeout_seconds: None,
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })?;

        LoggerConfig::new(
            ConsoleConfig::new(self.console.enabled, self.console.colored),
            format,
            self.level,
        )
        .map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from the configuration file and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Shared secret expected in the `password` field; empty disables the check
    #[serde(default)]
    pub password: String,

    /// Listen port; zero means "not configured"
    #[serde(default)]
    pub port: u16,

    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Path that accepts notifications
    #[serde(default = "default_request_path")]
    pub request_path: String,

    /// Verbose diagnostic logging
    #[serde(default)]
    pub debug: bool,

    /// Telegram bot configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            password: String::new(),
            port: 0,
            host: default_host(),
            request_path: default_request_path(),
            debug: false,
            bot: BotConfig::default(),
            logger: LoggerSettings::default(),
        }
    }
}

impl Settings {
    /// Get the bind address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Level the logger should run at once debug mode is taken into account
    pub fn effective_log_level(&self) -> &str {
        if self.debug { "debug" } else { &self.logger.level }
    }
}
