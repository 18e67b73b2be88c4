//! Configuration management module for uptime-relay
//!
//! This module provides layered configuration loading with support for:
//! - JSON or TOML configuration files (the legacy `config.json` shape is accepted as-is)
//! - Prefixed environment variable overrides
//! - The plain `PORT`, `REQUEST_PATH`, `HOSTNAME` and `debug` overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Configuration file (`config.json` by default)
//! 2. `UPTIME_RELAY_*` environment variables
//! 3. `PORT` / `REQUEST_PATH` / `HOSTNAME` / `debug` environment variables
//! 4. Command-line flags (applied by the CLI layer)

pub mod error;
pub mod loader;
pub mod service;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use service::ServiceConfig;
pub use settings::{BotConfig, LoggerSettings, Settings};
