//! Configuration constants.
//!
//! This module defines the constants used throughout the SDK, including base
//! hosts, timeouts, the navigation allowlist, and log size limits.

use std::time::Duration;

// Base hosts per environment
/// Placement and brand-configuration host (shared by stage and prod).
pub const PLACEMENTS_BASE_URL: &str = "https://brands.kmsmep.com";
/// Prescreen host for the stage environment.
pub const RTPS_STAGE_BASE_URL: &str = "https://acquire1uat.comenity.net";
/// Prescreen host for the production environment.
pub const RTPS_PROD_BASE_URL: &str = "https://acquire1.comenity.net";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Delay between detecting a challenge completion and reporting it.
///
/// Lets the cancelled navigation settle in the embedded renderer before the
/// view is dismissed. Overridable through `SdkConfig::completion_grace_delay`.
pub const DEFAULT_COMPLETION_GRACE_DELAY: Duration = Duration::from_millis(500);

/// Default User-Agent string for SDK requests.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "PartnerPlacementsSDK/",
    env!("CARGO_PKG_VERSION"),
    " (rust)"
);

/// Domains the challenge session may load content from.
///
/// A host matches when it equals one of these or is a subdomain of one.
pub const TRUSTED_NAVIGATION_DOMAINS: &[&str] = &[
    "comenity.net",
    "breadfinancial.com",
    "hcaptcha.com",
    "gstatic.com",
];

/// URL schemes the challenge session may always load (locally rendered pages).
pub const TRUSTED_LOCAL_SCHEMES: &[&str] = &["data", "about"];

/// Path segment the prescreen service expects in every RTPS request body.
pub const RTPS_URL_PATH: &str = "screenname";

// Log size limits
/// Maximum body length in characters written to the log per request/response
pub const MAX_LOGGED_BODY_CHARS: usize = 2000;
/// Maximum header value length in characters written to the log
pub const MAX_LOGGED_HEADER_VALUE_CHARS: usize = 500;

// Alert titles
/// Title used for every SDK-level alert raised through the error surface.
pub const SDK_ALERT_TITLE: &str = "Partner Placements SDK";
