//! Request/response observability hook.
//!
//! Every transport request reports its outbound request and whatever came
//! back (a response or a transport failure) to a `RequestLogger` before the
//! call returns.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::{MAX_LOGGED_BODY_CHARS, MAX_LOGGED_HEADER_VALUE_CHARS};
use crate::events::{EventSink, LogEvent, PartnerEvent};
use crate::utils::sanitize_and_truncate;

/// An outbound request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLog {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// The outcome of a request as seen by the transport.
///
/// `status` is `None` when no HTTP response arrived; `error` then carries the
/// transport failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseLog {
    pub url: String,
    pub status: Option<u16>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub error: Option<String>,
}

/// Receives every request/response pair of the transport.
pub trait RequestLogger: Send + Sync {
    fn log_request(&self, request: &RequestLog);
    fn log_response(&self, response: &ResponseLog);
}

/// Writes traffic to the `log` facade.
///
/// Bodies and header values are sanitized and truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestLogger;

impl RequestLogger for DefaultRequestLogger {
    fn log_request(&self, request: &RequestLog) {
        debug!(
            "--> {} {} headers={}",
            request.method,
            request.url,
            format_headers(&request.headers)
        );
        if let Some(body) = &request.body {
            debug!("--> body: {}", sanitize_and_truncate(body, MAX_LOGGED_BODY_CHARS));
        }
    }

    fn log_response(&self, response: &ResponseLog) {
        match (response.status, &response.error) {
            (Some(status), _) => debug!(
                "<-- {} {} headers={}",
                status,
                response.url,
                format_headers(&response.headers)
            ),
            (None, Some(error)) => warn!("<-- {} failed: {}", response.url, error),
            (None, None) => warn!("<-- {} returned nothing", response.url),
        }
        if let Some(body) = &response.body {
            debug!("<-- body: {}", sanitize_and_truncate(body, MAX_LOGGED_BODY_CHARS));
        }
    }
}

fn format_headers(headers: &BTreeMap<String, String>) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            format!(
                "{}: {}",
                name,
                sanitize_and_truncate(value, MAX_LOGGED_HEADER_VALUE_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Logs like `DefaultRequestLogger` and also forwards each entry to a flow's
/// sink as `PartnerEvent::Log`.
pub struct EventLogger {
    sink: Arc<dyn EventSink>,
}

impl EventLogger {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }
}

impl RequestLogger for EventLogger {
    fn log_request(&self, request: &RequestLog) {
        DefaultRequestLogger.log_request(request);
        self.sink
            .on_event(PartnerEvent::Log(LogEvent::Request(request.clone())));
    }

    fn log_response(&self, response: &ResponseLog) {
        DefaultRequestLogger.log_response(response);
        self.sink
            .on_event(PartnerEvent::Log(LogEvent::Response(response.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_event_logger_forwards_both_sides() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let logger = EventLogger::new(Arc::new(move |event: PartnerEvent| {
            recorder.lock().unwrap().push(event)
        }));

        let request = RequestLog {
            method: "GET".to_string(),
            url: "https://brands.kmsmep.com/brands/k/config".to_string(),
            headers: BTreeMap::new(),
            body: None,
        };
        let response = ResponseLog {
            url: request.url.clone(),
            status: Some(200),
            headers: BTreeMap::new(),
            body: Some("{}".to_string()),
            error: None,
        };
        logger.log_request(&request);
        logger.log_response(&response);

        let events = seen.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                PartnerEvent::Log(LogEvent::Request(request)),
                PartnerEvent::Log(LogEvent::Response(response)),
            ]
        );
        assert!(events.iter().all(|e| !e.is_terminal()));
    }

    #[test]
    fn test_format_headers_truncates_values() {
        let mut headers = BTreeMap::new();
        headers.insert("x-long".to_string(), "v".repeat(MAX_LOGGED_HEADER_VALUE_CHARS + 5));
        let formatted = format_headers(&headers);
        assert!(formatted.starts_with("x-long: vvv"));
        assert!(formatted.contains("(truncated"));
    }
}
