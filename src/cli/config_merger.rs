//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file and
//! environment based configuration. CLI arguments win over everything else.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};
use std::path::Path;

/// Configuration merger that applies CLI overrides on top of loaded settings
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading the given file or the default one
    ///
    /// # Errors
    /// Returns ConfigError if the file is missing or cannot be parsed.
    /// The loaded settings are not validated yet.
    pub fn from_config_path(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new(),
        };

        tracing::debug!(file = %loader.config_file().display(), "Loading configuration");

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration and validate the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.debug {
            config.debug = true;
        } else if cli.quiet {
            config.debug = false;
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                request_path,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.port = *port_num;
                }

                if let Some(path) = request_path {
                    config.request_path = path.clone();
                }

                // An explicit level beats debug mode from any source
                if let Some(level) = log_level {
                    config.debug = false;
                    config.logger.level = level.as_str().to_string();
                }
            }
        }
    }
}
