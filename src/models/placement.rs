//! Placement and prescreen configuration supplied by the host.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// What a flow is asked to do.
///
/// Exactly one shape exists per call: display parameters for a placement, or
/// parameters for a silent prescreen.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementConfiguration {
    /// Placement display parameters
    Placement(PlacementData),
    /// Risk prescreen parameters
    Rtps(RtpsData),
}

impl PlacementConfiguration {
    /// Placement display parameters, if this is a placement configuration.
    pub fn placement_data(&self) -> Option<&PlacementData> {
        match self {
            PlacementConfiguration::Placement(data) => Some(data),
            PlacementConfiguration::Rtps(_) => None,
        }
    }

    /// Prescreen parameters, if this is a prescreen configuration.
    pub fn rtps_data(&self) -> Option<&RtpsData> {
        match self {
            PlacementConfiguration::Placement(_) => None,
            PlacementConfiguration::Rtps(data) => Some(data),
        }
    }
}

/// Parameters of a placement to display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementData {
    pub financing_type: Option<FinancingType>,
    pub location_type: Option<LocationType>,
    pub placement_id: Option<String>,
    /// Anchor id of the host element the placement renders into
    pub dom_id: Option<String>,
    pub order: Option<Order>,
}

/// Parameters of a silent prescreen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RtpsData {
    pub order: Option<Order>,
    pub location_type: Option<LocationType>,
    pub mock_response: Option<MockResponse>,
    /// Prescreen id from an earlier prescreen; suppresses identity fields
    pub prescreen_id: Option<i64>,
}

/// Screen location of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Category,
    Product,
    Banner,
    Search,
    Cart,
    Checkout,
    Homepage,
    Landing,
    Footer,
    Dashboard,
    Header,
}

impl LocationType {
    /// Wire value of the location.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Category => "category",
            LocationType::Product => "product",
            LocationType::Banner => "banner",
            LocationType::Search => "search",
            LocationType::Cart => "cart",
            LocationType::Checkout => "checkout",
            LocationType::Homepage => "homepage",
            LocationType::Landing => "landing",
            LocationType::Footer => "footer",
            LocationType::Dashboard => "dashboard",
            LocationType::Header => "header",
        }
    }
}

/// Financing product advertised by a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancingType {
    Card,
    Installments,
}

/// Canned response the prescreen service returns in non-production testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MockResponse {
    Success,
    NoHit,
    MakeOffer,
    ExistingAccount,
    ExistingOffer,
    Error,
}

/// Snapshot of the cart or order the placement is shown for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_total: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_information: Option<PickupInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
}

/// Monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub currency: String,
    pub value: f64,
}

impl CurrencyValue {
    pub fn usd(value: f64) -> Self {
        Self {
            currency: "USD".to_string(),
            value,
        }
    }
}

/// Who collects an in-store pickup order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<crate::models::Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Person name as sent in pickup information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

/// Single order line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<CurrencyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
