//! SDK configuration and constants.
//!
//! This module provides:
//! - Configuration constants (hosts, timeouts, allowlist, log limits)
//! - Mandatory HTTP header constants
//! - Environment and endpoint URL construction
//! - Typed SDK configuration and CLI option parsing

mod constants;
mod endpoints;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use endpoints::{ApiUrl, Endpoints, Environment};
pub use headers::*;
pub use types::{LogFormat, LogLevel, Opt, SdkConfig};
