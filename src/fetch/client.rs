//! Transport client.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::{
    HEADER_CONTENT_TYPE, HEADER_CONTENT_TYPE_VALUE, HEADER_ORIGIN, HEADER_ORIGIN_VALUE,
    HEADER_USER_AGENT,
};
use crate::error_handling::TransportError;
use crate::fetch::{DefaultRequestLogger, HttpMethod, RequestBody, RequestLog, RequestLogger, ResponseLog};

/// Executes single JSON requests against the placement and prescreen hosts.
///
/// One attempt per call, no retry. Cloning is cheap; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    user_agent: String,
    logger: Arc<dyn RequestLogger>,
}

impl ApiClient {
    /// Creates a client logging through `DefaultRequestLogger`.
    pub fn new(http: reqwest::Client, user_agent: impl Into<String>) -> Self {
        Self {
            http,
            user_agent: user_agent.into(),
            logger: Arc::new(DefaultRequestLogger),
        }
    }

    /// Returns a client sharing this one's connections but reporting to `logger`.
    pub fn with_logger(&self, logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            http: self.http.clone(),
            user_agent: self.user_agent.clone(),
            logger,
        }
    }

    /// Sends one request and parses the JSON response.
    ///
    /// Mandatory headers (content type, user agent, origin marker) are sent
    /// on every request; a caller header with the same name replaces the
    /// mandatory value. The request and its outcome are reported to the
    /// logger before this returns, whether it succeeds or not.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute http(s) URL
    /// * `method` - HTTP method
    /// * `headers` - Extra headers; these win over the mandatory ones
    /// * `body` - JSON body, if any
    ///
    /// # Returns
    ///
    /// The parsed response body. An empty 2xx body parses as `Value::Null`.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl`: `url` is malformed or not http(s); nothing is sent
    /// - `UnsupportedBodyType` / `Serialization`: the body cannot be encoded; nothing is sent
    /// - `InvalidResponse`: no HTTP response was received
    /// - `Http`: the status is outside 200-299 (the body is discarded)
    /// - `Decoding`: the 2xx body is not JSON
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        headers: Option<&BTreeMap<String, String>>,
        body: Option<RequestBody>,
    ) -> Result<Value, TransportError> {
        let parsed = parse_request_url(url)?;
        let header_map = self.merge_headers(headers);
        let body_bytes = body.as_ref().map(RequestBody::to_bytes).transpose()?;

        self.logger.log_request(&RequestLog {
            method: method.to_string(),
            url: parsed.to_string(),
            headers: header_snapshot(&header_map),
            body: body_bytes
                .as_ref()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        });

        let mut builder = self
            .http
            .request(method.into(), parsed.clone())
            .headers(header_map);
        if let Some(bytes) = body_bytes {
            builder = builder.body(bytes);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = TransportError::InvalidResponse(e.to_string());
                self.log_failure(&parsed, &error);
                return Err(error);
            }
        };

        let status = response.status();
        let response_headers = header_snapshot(response.headers());
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                let error = TransportError::InvalidResponse(e.to_string());
                self.log_failure(&parsed, &error);
                return Err(error);
            }
        };

        self.logger.log_response(&ResponseLog {
            url: parsed.to_string(),
            status: Some(status.as_u16()),
            headers: response_headers,
            body: (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned()),
            error: None,
        });

        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
            });
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decoding(e.to_string()))
    }

    fn merge_headers(&self, extra: Option<&BTreeMap<String, String>>) -> HeaderMap {
        let mandatory = [
            (HEADER_CONTENT_TYPE, HEADER_CONTENT_TYPE_VALUE),
            (HEADER_USER_AGENT, self.user_agent.as_str()),
            (HEADER_ORIGIN, HEADER_ORIGIN_VALUE),
        ];

        let mut map = HeaderMap::new();
        let caller = extra
            .into_iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value.as_str()));
        // Header names are case-insensitive, so a later insert replaces an
        // earlier one regardless of how the caller spelled it.
        for (name, value) in mandatory.into_iter().chain(caller) {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    map.insert(name, value);
                }
                _ => log::warn!("Skipping invalid request header '{}'", name),
            }
        }
        map
    }

    fn log_failure(&self, url: &Url, error: &TransportError) {
        self.logger.log_response(&ResponseLog {
            url: url.to_string(),
            status: None,
            headers: BTreeMap::new(),
            body: None,
            error: Some(error.to_string()),
        });
    }
}

fn parse_request_url(url: &str) -> Result<Url, TransportError> {
    let parsed = Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => Err(TransportError::InvalidUrl(url.to_string())),
    }
}

fn header_snapshot(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}
