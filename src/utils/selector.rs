//! CSS selector and regex compilation utilities.

use regex::Regex;
use scraper::Selector;

/// Parses a CSS selector, logging instead of panicking on failure.
///
/// Callers treat `None` as "nothing matches", so a bad selector degrades one
/// extraction step rather than the whole parse.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "popup title")
///
/// # Returns
///
/// The parsed `Selector`, or `None` if parsing fails.
pub fn parse_selector(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}",
                selector_str,
                context,
                e
            );
            None
        }
    }
}

/// Compiles a regex, logging instead of panicking on failure.
///
/// # Arguments
///
/// * `pattern` - The regex pattern
/// * `context` - Context description for error logging
pub fn compile_regex(pattern: &str, context: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| log::error!("Failed to compile regex '{}' in {}: {}", pattern, context, e))
        .ok()
}
