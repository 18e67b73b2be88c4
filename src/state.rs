//! Application state for Axum web framework.
//!
//! Contains the configuration and services shared by all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::services::Services;
use crate::services::notifications::NotificationProvider;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Read-only runtime configuration
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates state that delivers through the Telegram Bot API.
    ///
    /// # Example
    /// ```ignore
    /// let config = Arc::new(ServiceConfig::from_settings(&settings)?);
    /// let state = AppState::new(config);
    /// ```
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self {
            services: Services::new(config.clone()),
            config,
        }
    }

    /// Creates state around a specific notification provider.
    pub fn with_provider(config: Arc<ServiceConfig>, provider: Arc<dyn NotificationProvider>) -> Self {
        Self {
            services: Services::with_provider(config.clone(), provider),
            config,
        }
    }
}
