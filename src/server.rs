//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;

use crate::api::routes::create_router;
use crate::config::{ServiceConfig, Settings};
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Builds the runtime configuration (fails on invalid settings)
    /// 2. Logs the non-secret configuration and builds the router
    /// 3. Binds to the configured address
    /// 4. Serves until Ctrl+C or SIGTERM
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        let address = self.settings.address();
        let router = self.prepare()?;

        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        serve(listener, router, shutdown_signal()).await
    }

    /// Validate settings and build the router without binding
    pub fn prepare(&self) -> anyhow::Result<Router> {
        tracing::info!(
            app_name = crate::build::PROJECT_NAME,
            app_version = crate::pkg_version(),
            "Application starting"
        );

        let config = ServiceConfig::from_settings(&self.settings).map_err(|e| {
            tracing::error!(error = %e, "Configuration validation failed");
            anyhow::anyhow!("Configuration validation failed: {}", e)
        })?;

        // The bot token and shared secret are never logged.
        tracing::info!(
            host = %self.settings.host,
            port = self.settings.port,
            request_path = %self.settings.request_path,
            chat = %self.settings.bot.chat,
            api_base = %config.api_base(),
            delivery_timeout_seconds = ?self.settings.bot.timeout_seconds,
            secret_configured = config.shared_secret().is_some(),
            debug = self.settings.debug,
            "Relay configuration loaded"
        );

        tracing::info!(
            level = %self.settings.effective_log_level(),
            format = %self.settings.logger.format,
            console_enabled = self.settings.logger.console.enabled,
            "Logger configuration loaded"
        );

        let state = AppState::new(Arc::new(config));
        tracing::info!(
            provider = state.services.notifications.provider_name(),
            route = %state.config.request_path(),
            "Notification route registered"
        );

        Ok(create_router(state))
    }
}

/// Serve the relay on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// If a handler cannot be installed that branch never fires; the other
/// one still does.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
