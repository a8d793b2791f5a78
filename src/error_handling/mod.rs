//! Error handling.
//!
//! This module provides the error taxonomy of the SDK:
//! - **Transport errors**: one variant per failure point of a request
//! - **SDK errors**: what the host sees inside error events
//! - **Initialization errors**: logger, HTTP client and configuration setup
//!
//! Every flow converts its failures into an `SdkError` and reports it as an
//! event; nothing is propagated to the host as a panic.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, InitializationError, SdkError, TransportError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = SdkError::from(TransportError::Http { status: 503 });
        assert_eq!(err.http_status(), Some(503));
        assert_eq!(err.to_string(), "API error: Server returned an error: 503");
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(SdkError::PopupParsing.http_status(), None);
        assert_eq!(
            SdkError::from(TransportError::UnsupportedBodyType).http_status(),
            None
        );
    }

    #[test]
    fn test_catch_all_message() {
        let err = SdkError::catch_all("missing field `id`");
        assert_eq!(err.to_string(), "Something went wrong: missing field `id`");
    }

    #[test]
    fn test_config_error_becomes_catch_all() {
        let err = SdkError::from(ConfigValidationError::new("timeout_seconds", "must be > 0"));
        match err {
            SdkError::CatchAll { message } => {
                assert!(message.contains("timeout_seconds"));
            }
            other => panic!("expected catch-all, got {other:?}"),
        }
    }
}
