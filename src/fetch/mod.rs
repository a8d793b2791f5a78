//! HTTP transport.
//!
//! This module provides the single request executor every flow goes through:
//! - URL validation before any network activity
//! - Mandatory header merging (caller wins)
//! - JSON body encoding
//! - Status validation and JSON decoding into `serde_json::Value`
//! - The `RequestLogger` observability hook

mod body;
mod client;
mod logger;

// Re-export public API
pub use body::{HttpMethod, RequestBody};
pub use client::ApiClient;
pub use logger::{DefaultRequestLogger, EventLogger, RequestLog, RequestLogger, ResponseLog};
