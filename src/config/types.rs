//! Configuration types and CLI options.
//!
//! This module defines the typed SDK configuration, the logging enums, and the
//! command-line options of the demo binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_COMPLETION_GRACE_DELAY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::endpoints::{Endpoints, Environment};
use crate::error_handling::ConfigValidationError;
use crate::models::{FinancingType, LocationType, MockResponse};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// SDK configuration.
///
/// Built once by the host and handed to `PlacementsSdk::new`. Every flow reads
/// its environment and hosts from here; nothing is process-global.
///
/// # Examples
///
/// ```no_run
/// use partner_placements::{Environment, SdkConfig};
///
/// let config = SdkConfig {
///     environment: Environment::Stage,
///     integration_key: "8a9fcd35-7f4d-4e3c-a9cc-6f6e98064df7".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Target environment
    pub environment: Environment,

    /// Brand / integration key issued to the partner
    pub integration_key: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Delay between detecting a challenge completion and reporting it
    pub completion_grace_delay: Duration,

    /// Forward request/response logs to the flow's event sink
    pub emit_log_events: bool,

    /// Host override; `None` uses the hosts of `environment`
    pub endpoints: Option<Endpoints>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Prod,
            integration_key: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            completion_grace_delay: DEFAULT_COMPLETION_GRACE_DELAY,
            emit_log_events: false,
            endpoints: None,
        }
    }
}

impl SdkConfig {
    /// Hosts in effect for this configuration.
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
            .clone()
            .unwrap_or_else(|| Endpoints::for_environment(self.environment))
    }

    /// Checks the configuration before any request is made.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.integration_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "integration_key",
                "integration key must not be empty",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "timeout must be greater than 0",
            ));
        }
        if let Some(endpoints) = &self.endpoints {
            for (field, value) in [
                ("endpoints.base_url", &endpoints.base_url),
                ("endpoints.rtps_base_url", &endpoints.rtps_base_url),
            ] {
                let valid = Url::parse(value)
                    .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
                    .unwrap_or(false);
                if !valid {
                    return Err(ConfigValidationError::new(
                        field,
                        format!("'{value}' is not an http(s) URL"),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Command-line options for the demo binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "partner_placements",
    about = "Fetches financing placements and prints the resulting SDK events."
)]
pub struct Opt {
    /// Brand / integration key
    #[arg(long, env = "PARTNER_INTEGRATION_KEY")]
    pub integration_key: String,

    /// Target environment
    #[arg(long, value_enum, default_value = "stage")]
    pub environment: Environment,

    /// Placement id to request
    #[arg(long)]
    pub placement_id: Option<String>,

    /// Screen location of the placement
    #[arg(long, value_enum)]
    pub location: Option<LocationType>,

    /// Financing type of the placement
    #[arg(long, value_enum)]
    pub financing_type: Option<FinancingType>,

    /// Order total in the smallest currency unit
    #[arg(long)]
    pub price: Option<f64>,

    /// Open the overlay directly instead of rendering inline content
    #[arg(long)]
    pub open_experience: bool,

    /// Run a silent prescreen instead of a placement request
    #[arg(long)]
    pub rtps: bool,

    /// Existing prescreen id (prescreen mode only)
    #[arg(long)]
    pub prescreen_id: Option<i64>,

    /// Ask the prescreen service for a canned response
    #[arg(long, value_enum)]
    pub mock_response: Option<MockResponse>,

    /// Verification token sent with prescreen requests
    #[arg(long, default_value = "")]
    pub verification_token: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the SDK configuration from the command line.
    pub fn sdk_config(&self) -> SdkConfig {
        SdkConfig {
            environment: self.environment,
            integration_key: self.integration_key.clone(),
            timeout_seconds: self.timeout_seconds,
            emit_log_events: true,
            ..Default::default()
        }
    }
}
