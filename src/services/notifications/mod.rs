//! Notification system with pluggable providers.
//!
//! Alerts are rendered by [`message`] and handed to a `NotificationProvider`.
//! Telegram is the only provider shipped.

pub mod message;
mod provider;
mod telegram_provider;

pub mod notification_service;

pub use message::{AlertEvent, AlertType};
pub use notification_service::NotificationService;
pub use provider::{DeliveryResult, NotificationProvider, OutboundMessage};
pub use telegram_provider::TelegramProvider;
