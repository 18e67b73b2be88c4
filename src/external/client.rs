use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every outbound request
pub fn user_agent() -> String {
    format!("{}/{}", crate::build::PROJECT_NAME, crate::pkg_version())
}

/// Global HTTP client instance
///
/// This client is initialized lazily on first access and reused across the application.
///
/// # Benefits
/// - **Connection pooling**: Reuses TCP connections to the Bot API
/// - **Memory efficiency**: Single client instance for the entire application
///
/// # Features
/// - **Connect timeout**: 10s to establish a connection
/// - **No request timeout**: a slow response holds the inbound request open;
///   callers opt into a per-request timeout instead
/// - **Security**: Uses Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(user_agent())
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }

    #[test]
    fn test_user_agent() {
        let ua = user_agent();
        assert!(ua.starts_with("uptime-relay/"));
        assert!(ua.ends_with(crate::pkg_version()));
    }
}
