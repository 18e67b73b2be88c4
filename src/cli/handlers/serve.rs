//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{ServiceConfig, Settings};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, validates configuration and exits without starting server
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            let summary = self.validate_only()?;
            println!("{summary}");
            Ok(())
        } else {
            Server::new(self.config).run().await
        }
    }

    /// Validate configuration without starting the server
    ///
    /// Returns a printable summary of what would be served.
    pub fn validate_only(&self) -> anyhow::Result<String> {
        let service = ServiceConfig::from_settings(&self.config)?;

        let mut lines = vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Server would bind to: {}", self.config.address()),
            format!("✓ Notifications accepted at: POST {}", service.request_path()),
            format!("✓ Messages go to chat: {}", service.chat_id()),
        ];
        if service.shared_secret().is_none() {
            lines.push("! No password configured: every request is accepted".to_string());
        }
        lines.push("Dry run completed successfully".to_string());

        Ok(lines.join("\n"))
    }
}
