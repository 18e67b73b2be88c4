//! Shared-secret check for inbound notifications.

/// Returns `true` when a request carrying `supplied` may proceed.
///
/// With no configured secret every request passes, password or not. With a
/// secret configured the supplied password must be present, non-empty and
/// equal to it.
pub fn verify_password(configured: Option<&str>, supplied: Option<&str>) -> bool {
    match configured.filter(|secret| !secret.is_empty()) {
        None => true,
        Some(secret) => matches!(supplied, Some(password) if !password.is_empty() && password == secret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_mode_accepts_anything() {
        assert!(verify_password(None, None));
        assert!(verify_password(None, Some("")));
        assert!(verify_password(None, Some("whatever")));
        assert!(verify_password(Some(""), Some("whatever")));
    }

    #[test]
    fn test_secret_requires_exact_match() {
        assert!(verify_password(Some("hunter2"), Some("hunter2")));
        assert!(!verify_password(Some("hunter2"), Some("hunter3")));
        assert!(!verify_password(Some("hunter2"), Some("HUNTER2")));
        assert!(!verify_password(Some("hunter2"), Some(" hunter2")));
    }

    #[test]
    fn test_secret_rejects_missing_password() {
        assert!(!verify_password(Some("hunter2"), None));
        assert!(!verify_password(Some("hunter2"), Some("")));
    }

    proptest! {
        #[test]
        fn prop_configured_secret(secret in ".{1,32}", password in proptest::option::of(".{0,32}")) {
            let expected = matches!(&password, Some(p) if !p.is_empty() && *p == secret);
            prop_assert_eq!(verify_password(Some(&secret), password.as_deref()), expected);
        }

        #[test]
        fn prop_configured_secret_accepts_itself(secret in ".{1,32}") {
            prop_assert!(verify_password(Some(&secret), Some(&secret)));
        }

        #[test]
        fn prop_open_mode(password in proptest::option::of(".{0,32}")) {
            prop_assert!(verify_password(None, password.as_deref()));
            prop_assert!(verify_password(Some(""), password.as_deref()));
        }
    }
}
