//! Service layer for business logic operations.
//!
//! Services encapsulate the relay logic and are shared with handlers
//! through application state.

pub mod auth;
pub mod notifications;

pub use notifications::NotificationService;

use crate::config::ServiceConfig;
use notifications::{NotificationProvider, TelegramProvider};
use std::sync::Arc;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since everything inside is behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub notifications: NotificationService,
}

impl Services {
    /// Creates services delivering through Telegram with the global client.
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        let provider = Arc::new(TelegramProvider::new(&config));
        Self::with_provider(config, provider)
    }

    /// Creates services around a specific provider.
    pub fn with_provider(config: Arc<ServiceConfig>, provider: Arc<dyn NotificationProvider>) -> Self {
        Self {
            notifications: NotificationService::new(config, provider),
        }
    }
}
