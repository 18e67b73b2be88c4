//! Inbound monitor notification DTO.
//!
//! Field names follow the monitoring service's webhook template. Values may
//! arrive as JSON (typed) or as form data (all strings), so the two loosely
//! typed fields use lenient deserializers.

use crate::services::notifications::{AlertEvent, AlertType};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Body of an inbound monitor notification
#[derive(Clone, Default, Deserialize)]
pub struct NotificationPayload {
    /// Shared secret supplied by the caller
    #[serde(default)]
    pub password: Option<String>,

    #[serde(rename = "monitorFriendlyName", default)]
    pub monitor_friendly_name: String,

    /// Raw alert type token (`"1"`, `"2"`, `"3"` or anything else)
    #[serde(rename = "alertType", default, deserialize_with = "deserialize_token")]
    pub alert_type: String,

    /// Seconds the monitor was down; absent or empty means zero
    #[serde(rename = "alertDuration", default, deserialize_with = "deserialize_duration")]
    pub alert_duration: u64,
}

impl NotificationPayload {
    /// Splits the payload into the supplied password and the alert to render
    pub fn into_parts(self) -> (Option<String>, AlertEvent) {
        let event = AlertEvent::new(
            self.monitor_friendly_name,
            AlertType::from(self.alert_type.as_str()),
            self.alert_duration,
        );
        (self.password, event)
    }
}

impl fmt::Debug for NotificationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationPayload")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("monitor_friendly_name", &self.monitor_friendly_name)
            .field("alert_type", &self.alert_type)
            .field("alert_duration", &self.alert_duration)
            .finish()
    }
}

/// Accepts a string or an integer token; null becomes an empty token.
fn deserialize_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TokenVisitor;

    impl<'de> Visitor<'de> for TokenVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer alert type")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TokenVisitor)
}

/// Accepts a non-negative integer or numeric string; `""` and null are zero.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct DurationVisitor;

    impl<'de> Visitor<'de> for DurationVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative number of seconds")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("negative duration: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<u64>()
                .map_err(|_| E::custom(format!("invalid duration: {v:?}")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(DurationVisitor)
}
