//! Error type definitions.
//!
//! This module defines all error types used throughout the SDK.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The supplied configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// A configuration field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failures of a single transport request.
///
/// Every variant except `Http` and `Decoding` is raised before the response
/// body is read; `InvalidUrl`, `UnsupportedBodyType` and `Serialization` are
/// raised before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The URL could not be parsed or is not http(s).
    #[error("The URL provided is invalid: {0}")]
    InvalidUrl(String),

    /// The request body is neither a key/value map nor a structured object.
    #[error("The request body is not supported.")]
    UnsupportedBodyType,

    /// The request body could not be serialized.
    #[error("Failed to serialize the request body: {0}")]
    Serialization(String),

    /// No HTTP response was received (connect, timeout, read failure).
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The server answered with a status outside 200-299.
    #[error("Server returned an error: {status}")]
    Http {
        /// Status code returned by the server
        status: u16,
    },

    /// The response body is not valid JSON.
    #[error("Failed to decode the server response: {0}")]
    Decoding(String),
}

/// Host-visible SDK errors.
///
/// Carried inside `PartnerEvent::SdkError`; the display text is the
/// human-readable message shown to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// A transport request failed.
    #[error("API error: {0}")]
    Transport(#[from] TransportError),

    /// The placement response had no extractable overlay content.
    #[error("Unable to parse the popup placement content.")]
    PopupParsing,

    /// Anything else (decode failures of well-formed JSON, invalid config).
    #[error("Something went wrong: {message}")]
    CatchAll {
        /// Description of the failure
        message: String,
    },
}

impl SdkError {
    /// Wraps any error as a catch-all.
    pub fn catch_all(err: impl std::fmt::Display) -> Self {
        SdkError::CatchAll {
            message: err.to_string(),
        }
    }

    /// HTTP status code, if the failure was an HTTP error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SdkError::Transport(TransportError::Http { status }) => Some(*status),
            _ => None,
        }
    }
}

impl From<ConfigValidationError> for SdkError {
    fn from(err: ConfigValidationError) -> Self {
        SdkError::catch_all(err)
    }
}
