//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with:
//! - Console output with color control (ANSI only when stdout is a TTY)
//! - Selectable line format (Full, Compact, JSON)
//! - A level filter that `RUST_LOG` can refine

pub mod config;
pub mod error;

// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter from the configured level, letting `RUST_LOG`
/// directives refine it when present.
fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let level = config.parse_level()?;
    let base = level.as_str().to_lowercase();

    let directives = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(extra) if !extra.trim().is_empty() => format!("{},{}", base, extra),
        _ => base,
    };

    EnvFilter::try_new(&directives).map_err(|e| LoggerError::config(e.to_string()))
}

/// Initialize the logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = build_filter(&config)?;

    if !config.console.enabled {
        tracing_subscriber::registry().with(filter).try_init()?;
        return Ok(());
    }

    let use_ansi = config.console.colored && std::io::stdout().is_terminal();

    match config.format {
        LogFormat::Full => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()?;
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .compact(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json())
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_from_level() {
        let config = LoggerConfig {
            level: "warn".to_string(),
            ..Default::default()
        };
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("warn"));
    }

    #[test]
    fn test_init_rejects_invalid_level() {
        let config = LoggerConfig {
            level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(matches!(init_logger(config), Err(LoggerError::Config { .. })));
    }
}
