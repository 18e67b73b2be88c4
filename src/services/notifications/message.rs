//! Alert events and their chat message text.
//!
//! Messages target Telegram's MarkdownV2 dialect. Only the monitor name is
//! escaped; the template text already carries its own escapes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Characters in monitor names that MarkdownV2 would otherwise interpret
static RESERVED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.+\-]").expect("reserved character pattern is valid")
});

/// Kind of monitor event carried by a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertType {
    /// Token `"1"`: the monitor went down
    Down,
    /// Token `"2"`: the monitor is back up
    Up,
    /// Token `"3"`: the monitored certificate expired
    SslExpiry,
    /// Any other token, kept verbatim
    Unknown(String),
}

impl AlertType {
    /// Wire token for this alert type
    pub fn as_token(&self) -> &str {
        match self {
            AlertType::Down => "1",
            AlertType::Up => "2",
            AlertType::SslExpiry => "3",
            AlertType::Unknown(token) => token,
        }
    }
}

impl From<&str> for AlertType {
    fn from(token: &str) -> Self {
        match token {
            "1" => AlertType::Down,
            "2" => AlertType::Up,
            "3" => AlertType::SslExpiry,
            other => AlertType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A decoded monitor notification, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub monitor_name: String,
    pub alert_type: AlertType,
    /// Seconds the monitor was down; only rendered for [`AlertType::Up`]
    pub duration_seconds: u64,
}

impl AlertEvent {
    pub fn new(monitor_name: impl Into<String>, alert_type: AlertType, duration_seconds: u64) -> Self {
        Self {
            monitor_name: monitor_name.into(),
            alert_type,
            duration_seconds,
        }
    }

    /// Render the MarkdownV2 message text
    pub fn compose(&self) -> String {
        compose(&self.monitor_name, &self.alert_type, self.duration_seconds)
    }
}

/// Prefix every `.`, `+` and `-` with a backslash.
///
/// Not idempotent: escaping already-escaped text escapes the characters
/// again but leaves the earlier backslashes alone, so apply it once.
pub fn escape_markdown(text: &str) -> String {
    RESERVED_CHARS.replace_all(text, r"\$0").into_owned()
}

/// Render a duration such as `1小时1分钟1秒`.
///
/// Zero-valued parts are omitted and hours are not wrapped at a day, so a
/// zero duration renders as an empty string.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}小时"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}分钟"));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds}秒"));
    }
    out
}

/// Build the message text for one event.
///
/// The unknown-type template interpolates the raw token without escaping.
pub fn compose(monitor_name: &str, alert_type: &AlertType, duration_seconds: u64) -> String {
    match alert_type {
        AlertType::Down => {
            format!("坏耶， *{}* 出问题了欸\\.\\.\\.", escape_markdown(monitor_name))
        }
        AlertType::Up => format!(
            "好耶，经过 _{}_ 的维护， *{}* 恢复上线啦～",
            format_duration(duration_seconds),
            escape_markdown(monitor_name)
        ),
        AlertType::SslExpiry => {
            format!("要注意哦， *{}* 的证书过期啦\\.\\.", escape_markdown(monitor_name))
        }
        AlertType::Unknown(token) => {
            format!("出现了一个异常的请求类型 *{token}* ，是什么新的特性吗？")
        }
    }
}
