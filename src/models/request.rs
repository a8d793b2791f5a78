//! Wire-shaped request bodies produced by the builders.
//!
//! Field presence mirrors the input: every optional field is skipped when
//! `None`, so an absent configuration value never reaches the wire.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Environment;
use crate::models::{Buyer, FinancingType, LocationType, Order, PaymentMode};

/// Body of `POST /generatePlacements`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub placements: Vec<PlacementRequestBody>,
    pub brand_id: String,
}

/// One requested placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "domID", skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing_type: Option<FinancingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PlacementContext>,
}

/// Merchant context sent with a placement request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementContext {
    #[serde(rename = "ENV", skip_serializing_if = "Option::is_none")]
    pub env: Option<Environment>,
    #[serde(rename = "LOCATION", skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationType>,
    #[serde(rename = "PRICE", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "CARDHOLDER_TIER", skip_serializing_if = "Option::is_none")]
    pub cardholder_tier: Option<String>,
    #[serde(rename = "STORE_NUMBER", skip_serializing_if = "Option::is_none")]
    pub store_number: Option<String>,
    #[serde(rename = "LOYALTY_ID", skip_serializing_if = "Option::is_none")]
    pub loyalty_id: Option<String>,
    #[serde(rename = "CAMPAIGN_ID", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(rename = "DEPARTMENT_ID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(rename = "EXISTING_CH", skip_serializing_if = "Option::is_none")]
    pub existing_card_holder: Option<bool>,
    #[serde(rename = "OVERRIDE_KEY", skip_serializing_if = "Option::is_none")]
    pub override_key: Option<String>,
    #[serde(rename = "CLIENT_VAR_1", skip_serializing_if = "Option::is_none")]
    pub client_variable1: Option<String>,
    #[serde(rename = "CLIENT_VAR_2", skip_serializing_if = "Option::is_none")]
    pub client_variable2: Option<String>,
    #[serde(rename = "CLIENT_VAR_3", skip_serializing_if = "Option::is_none")]
    pub client_variable3: Option<String>,
    #[serde(rename = "CLIENT_VAR_4", skip_serializing_if = "Option::is_none")]
    pub client_variable4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subchannel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(rename = "paymentMode", skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}

/// Body of `POST /api/prescreen`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpsRequest {
    pub url_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subchannel: Option<String>,
    #[serde(rename = "reCaptchaToken", skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_response: Option<crate::models::MockResponse>,
    pub override_config: OverrideConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescreen_id: Option<String>,
}

/// Presentation overrides sent with every prescreen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    pub enhanced_presentment: bool,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            enhanced_presentment: true,
        }
    }
}

/// Body of the view/click tracking endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    pub brand_id: String,
    pub placement_content_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationType>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}
