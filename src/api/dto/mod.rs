//! Data Transfer Objects for API requests.
//!
//! - `notification` - inbound monitor notification body

mod notification;

pub use notification::NotificationPayload;
