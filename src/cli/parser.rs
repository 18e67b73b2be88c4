//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;

/// Relay Uptime Robot alerts to a Telegram chat
#[derive(Parser, Debug)]
#[command(name = "uptime-relay")]
#[command(about = "Relay Uptime Robot alerts to a Telegram chat")]
#[command(long_about = "
uptime-relay receives Uptime Robot webhook notifications, checks the shared
password and forwards a formatted message to a Telegram chat through the
Bot API.

EXAMPLES:
    # Start the relay with ./config.json
    uptime-relay

    # Use a custom configuration file
    uptime-relay --config /etc/uptime-relay/config.toml serve

    # Listen on all interfaces under a custom path
    uptime-relay serve --host 0.0.0.0 --port 8080 --request-path /uptime

    # Check configuration without starting the server
    uptime-relay serve --dry-run

ENVIRONMENT:
    UPTIME_RELAY_CONFIG_FILE   configuration file (default: config.json)
    UPTIME_RELAY_<KEY>         override a key, '__' separates sections
    PORT, HOSTNAME, REQUEST_PATH, debug
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// JSON or TOML, picked by extension. The file must exist and be readable.
    ///
    /// Example: --config /etc/uptime-relay/config.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable debug mode
    ///
    /// Raises log output to debug level and logs every received payload
    /// with the password redacted. Cannot be used with --quiet.
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --debug.
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the relay server (default)
    ///
    /// Examples:
    ///   uptime-relay serve                           # Start with defaults
    ///   uptime-relay serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   uptime-relay serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Overrides `host` and the HOSTNAME environment variable.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Overrides `port` and the PORT environment variable.
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Path that accepts notifications
        ///
        /// Overrides `request_path` and the REQUEST_PATH environment variable.
        #[arg(long, value_name = "PATH", value_parser = super::validation::validate_request_path)]
        request_path: Option<String>,

        /// Log level override
        ///
        /// Takes precedence over --debug/--quiet and the configuration file.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Prints the resolved bind address and route, then exits without
        /// binding. Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
            request_path: None,
            log_level: None,
            dry_run: false,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The subcommand to run; `serve` when none was given
    pub fn subcommand_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["uptime-relay", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["uptime-relay", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["uptime-relay"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert_eq!(cli.subcommand_or_default(), Commands::default());
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "uptime-relay",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--request-path",
            "/uptime",
            "--log-level",
            "warning",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(
            cli.subcommand_or_default(),
            Commands::Serve {
                host: Some("0.0.0.0".to_string()),
                port: Some(9000),
                request_path: Some("/uptime".to_string()),
                log_level: Some(LogLevel::Warn),
                dry_run: true,
            }
        );
    }

    #[test]
    fn test_debug_conflicts_with_quiet() {
        let err = Cli::try_parse_from(["uptime-relay", "--debug", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["uptime-relay", "serve", "--port", "0"]).is_err());
        assert!(Cli::try_parse_from(["uptime-relay", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_invalid_request_path_rejected() {
        for path in ["hook", "/:hook", "/a?b"] {
            assert!(
                Cli::try_parse_from(["uptime-relay", "serve", "--request-path", path]).is_err(),
                "Path {:?} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = Cli::try_parse_from(["uptime-relay", "--config", "/nonexistent/config.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_strings() {
        assert_eq!(LogLevel::Error.as_str(), "error");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
