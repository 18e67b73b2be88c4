//! Configuration loader for uptime-relay
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for the configuration file path
pub const CONFIG_FILE_ENV: &str = "UPTIME_RELAY_CONFIG_FILE";

/// Default configuration file, relative to the working directory
const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "UPTIME_RELAY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Plain environment overrides honoured for compatibility with existing
/// deployments, as `(variable, configuration key)`.
const PORT_ENV: (&str, &str) = ("PORT", "port");
const REQUEST_PATH_ENV: (&str, &str) = ("REQUEST_PATH", "request_path");
const HOSTNAME_ENV: (&str, &str) = ("HOSTNAME", "host");
const DEBUG_ENV: &str = "debug";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (lowest first):
/// 1. The configuration file (required)
/// 2. `UPTIME_RELAY_*` environment variables (`UPTIME_RELAY_BOT__TOKEN` -> `bot.token`)
/// 3. `PORT`, `REQUEST_PATH`, `HOSTNAME` and `debug`
///
/// The loader does not validate; validation runs after CLI overrides are
/// merged so that a flag can supply a value the file leaves out.
#[derive(Debug)]
pub struct ConfigLoader {
    config_file: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the file named by `UPTIME_RELAY_CONFIG_FILE`,
    /// falling back to `config.json`.
    pub fn new() -> Self {
        let config_file = std::env::var(CONFIG_FILE_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self { config_file }
    }

    /// Create a loader for a specific configuration file
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_file: path.into(),
        }
    }

    /// Get the configuration file path
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file is missing or has an unsupported extension
    /// - A source cannot be parsed or deserialized
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = self.add_file_source(Config::builder())?;
        let builder = Self::add_env_source(builder);
        let builder = Self::add_plain_env_overrides(builder)?;

        builder.build().map_err(ConfigError::from)
    }

    /// Add the configuration file, picking the format from its extension
    fn add_file_source(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let path = &self.config_file;
        if !path.is_file() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let format = Self::file_format(path)?;
        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!(
                "Configuration path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        Ok(builder.add_source(File::new(name, format).required(true)))
    }

    fn file_format(path: &Path) -> Result<FileFormat, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(ConfigError::ParseError(format!(
                "Unsupported configuration file '{}'. Use a .json or .toml file.",
                path.display()
            ))),
        }
    }

    /// Add environment variable source to the config builder
    ///
    /// Examples:
    /// - `UPTIME_RELAY_PORT` -> `port`
    /// - `UPTIME_RELAY_BOT__CHAT` -> `bot.chat`
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }

    /// Apply `PORT`, `REQUEST_PATH`, `HOSTNAME` and `debug`
    fn add_plain_env_overrides(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = builder;
        for (var, key) in [PORT_ENV, REQUEST_PATH_ENV, HOSTNAME_ENV] {
            builder = builder.set_override_option(key, non_empty_env(var))?;
        }

        let debug = non_empty_env(DEBUG_ENV).map(|_| true);
        Ok(builder.set_override_option("debug", debug)?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    pub(crate) static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Environment variables that influence loading
    const ALL_VARS: &[&str] = &[
        CONFIG_FILE_ENV,
        "PORT",
        "REQUEST_PATH",
        "HOSTNAME",
        "debug",
        "UPTIME_RELAY_PORT",
        "UPTIME_RELAY_PASSWORD",
        "UPTIME_RELAY_BOT__TOKEN",
        "UPTIME_RELAY_BOT__CHAT",
    ];

    /// Helper to create a temporary directory with one config file
    fn setup_config_file(name: &str, content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write config file");
        (temp_dir, path)
    }

    /// Helper to safely set environment variables for a test
    pub(crate) struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        /// Start from a clean slate for every variable the loader reads
        pub(crate) fn clean() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for var in ALL_VARS {
                guard.remove(var);
            }
            guard
        }

        pub(crate) fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        pub(crate) fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore in reverse so the first recorded original wins
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const LEGACY_JSON: &str = r#"{
    "password": "s3cret",
    "bot": {
        "token": "123456:ABC-DEF",
        "chat": "@status_channel"
    },
    "port": 3000
}"#;

    #[test]
    fn test_loader_default_path() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();

        let loader = ConfigLoader::new();
        assert_eq!(loader.config_file(), Path::new("config.json"));
    }

    #[test]
    fn test_loader_path_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        env.set(CONFIG_FILE_ENV, "/etc/uptime-relay/config.toml");

        let loader = ConfigLoader::new();
        assert_eq!(
            loader.config_file(),
            Path::new("/etc/uptime-relay/config.toml")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let temp_dir = TempDir::new().unwrap();

        let loader = ConfigLoader::with_file(temp_dir.path().join("config.json"));
        let result = loader.load();

        if let Err(ConfigError::FileNotFound(msg)) = result {
            assert!(msg.contains("config.json"));
        } else {
            panic!("Expected FileNotFound error");
        }
    }

    #[test]
    fn test_load_unsupported_extension() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.yaml", "port: 3000");

        let result = ConfigLoader::with_file(path).load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_legacy_json() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");

        assert_eq!(settings.password, "s3cret");
        assert_eq!(settings.bot.token, "123456:ABC-DEF");
        assert_eq!(settings.bot.chat, "@status_channel");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.request_path, "/");
        assert!(!settings.debug);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_toml() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();

        let toml_config = r#"
port = 4000
host = "0.0.0.0"
request_path = "/uptime"

[bot]
token = "123456:ABC-DEF"
chat = "-1001234567890"
timeout_seconds = 20

[logger]
level = "warn"
format = "json"
"#;
        let (_dir, path) = setup_config_file("relay.toml", toml_config);

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");

        assert_eq!(settings.port, 4000);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.request_path, "/uptime");
        assert_eq!(settings.bot.chat, "-1001234567890");
        assert_eq!(settings.bot.timeout_seconds, Some(20));
        assert_eq!(settings.logger.level, "warn");
        assert_eq!(settings.logger.format, "json");
    }

    #[test]
    fn test_load_missing_required_values_still_loads() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", r#"{ "bot": {} }"#);

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");
        assert_eq!(settings.port, 0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_prefixed_env_override() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        env.set("UPTIME_RELAY_BOT__TOKEN", "999:override");
        env.set("UPTIME_RELAY_PORT", "5000");

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");
        assert_eq!(settings.bot.token, "999:override");
        assert_eq!(settings.port, 5000);
        // Untouched values come from the file
        assert_eq!(settings.bot.chat, "@status_channel");
    }

    #[test]
    fn test_plain_env_overrides() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        env.set("PORT", "8081");
        env.set("REQUEST_PATH", "/hooks/uptime");
        env.set("HOSTNAME", "0.0.0.0");
        env.set("debug", "1");

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");
        assert_eq!(settings.port, 8081);
        assert_eq!(settings.request_path, "/hooks/uptime");
        assert_eq!(settings.host, "0.0.0.0");
        assert!(settings.debug);
    }

    #[test]
    fn test_plain_port_beats_prefixed_port() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        env.set("UPTIME_RELAY_PORT", "5000");
        env.set("PORT", "6000");

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");
        assert_eq!(settings.port, 6000);
    }

    #[test]
    fn test_empty_plain_env_is_ignored() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        env.set("PORT", "");
        env.set("debug", "");

        let settings = ConfigLoader::with_file(path).load().expect("Should load settings");
        assert_eq!(settings.port, 3000);
        assert!(!settings.debug);
    }

    #[test]
    fn test_invalid_port_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();
        let (_dir, path) = setup_config_file("config.json", LEGACY_JSON);

        env.set("PORT", "not-a-port");

        assert!(ConfigLoader::with_file(path).load().is_err());
    }
}
