//! Shared helpers.
//!
//! - Log text sanitization and truncation
//! - CSS selector and regex compilation

pub mod sanitize;
mod selector;

pub use sanitize::{sanitize_and_truncate, sanitize_log_text};
pub use selector::{compile_regex, parse_selector};
