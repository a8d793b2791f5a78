//! Utilities for preparing text for log output.
//!
//! Request and response bodies are logged verbatim except for control
//! characters, and long values are cut so a single response cannot flood
//! the log.

/// Removes control characters from a message.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) garble
/// terminal output and break line-oriented log collectors.
///
/// # Arguments
///
/// * `message` - The text to sanitize
///
/// # Returns
///
/// The message with control characters removed.
pub fn sanitize_log_text(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes a message and truncates it to `max_chars` characters.
///
/// Truncation counts characters, not bytes, so multi-byte text is never split
/// mid-character. A truncated message ends with a marker carrying the
/// original length.
///
/// # Arguments
///
/// * `message` - The text to sanitize and truncate
/// * `max_chars` - Maximum number of characters kept from the message
///
/// # Returns
///
/// A sanitized and possibly truncated version of the message.
pub fn sanitize_and_truncate(message: &str, max_chars: usize) -> String {
    let sanitized = sanitize_log_text(message);
    let total = sanitized.chars().count();
    if total <= max_chars {
        return sanitized;
    }
    let kept: String = sanitized.chars().take(max_chars).collect();
    format!("{kept}... (truncated, original length: {total} chars)")
}
