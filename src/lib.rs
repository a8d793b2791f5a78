//! partner_placements library: merchant-financing placements for partner apps
//!
//! This library fetches financing "placement" content for a partner's
//! screens, turns it into inline content or an overlay model, runs silent
//! risk prescreens, and supervises the embedded web session that hosts a
//! third-party challenge reached from an overlay.
//!
//! Every flow reports its outcome as a `PartnerEvent` to a host-supplied
//! `EventSink`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use partner_placements::{
//!     Environment, MerchantConfiguration, PartnerEvent, PlacementConfiguration, PlacementData,
//!     PlacementsSdk, SdkConfig,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sdk = PlacementsSdk::new(SdkConfig {
//!     environment: Environment::Stage,
//!     integration_key: "8a9fcd35-7f4d-4e3c-a9cc-6f6e98064df7".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let placement = PlacementConfiguration::Placement(PlacementData {
//!     placement_id: Some("abc".to_string()),
//!     ..Default::default()
//! });
//! sdk.open_experience_for_placement(
//!     &MerchantConfiguration::default(),
//!     &placement,
//!     Arc::new(|event: PartnerEvent| match event {
//!         PartnerEvent::RenderPopup(model) => println!("overlay: {:?}", model.title),
//!         other => println!("{other:?}"),
//!     }),
//! )
//! .await;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod builders;
pub mod challenge;
pub mod config;
mod error_handling;
pub mod events;
pub mod fetch;
pub mod flow;
pub mod initialization;
pub mod models;
pub mod parse;
mod sdk;
mod utils;

// Re-export public API
pub use challenge::{
    ChallengeContent, ChallengeHandle, ChallengeHost, NavigationDecision, SessionPhase,
};
pub use config::{Endpoints, Environment, LogFormat, LogLevel, Opt, SdkConfig};
pub use error_handling::{ConfigValidationError, InitializationError, SdkError, TransportError};
pub use events::{EventSink, LogEvent, PartnerEvent};
pub use models::{
    Address, Buyer, CurrencyValue, FinancingType, LocationType, MerchantConfiguration,
    MockResponse, Order, PlacementConfiguration, PlacementData, PlacementsResponse,
    PopupPlacementModel, RtpsData, RtpsResponse, WebViewPlacement,
};
pub use sdk::{PlacementsSdk, StaticTokenProvider, VerificationTokenProvider};
