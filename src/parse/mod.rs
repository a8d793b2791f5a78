//! HTML parsing.
//!
//! This module extracts the structured popup model from server-authored
//! placement HTML. Extraction fails soft: callers get `None`, never a panic.

mod popup;

// Re-export public API
pub use popup::extract_popup_model;
