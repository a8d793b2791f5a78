//! HTTP header name constants.
//!
//! This module defines the mandatory headers attached to every SDK request.
//! Caller-supplied headers with the same name replace these values.

/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// Value sent for Content-Type (all bodies are JSON)
pub const HEADER_CONTENT_TYPE_VALUE: &str = "application/json";
/// User-Agent header
pub const HEADER_USER_AGENT: &str = "User-Agent";
/// Origin marker header identifying native SDK traffic
pub const HEADER_ORIGIN: &str = "X-Client-Origin";
/// Value sent for the origin marker
pub const HEADER_ORIGIN_VALUE: &str = "native-rust-sdk";
