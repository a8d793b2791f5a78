//! Merchant configuration supplied by the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Merchant-level configuration shared by every flow.
///
/// Owned by the host and only read by the SDK. Absent values are `None` and
/// are omitted from outbound requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MerchantConfiguration {
    pub buyer: Option<Buyer>,
    pub loyalty_id: Option<String>,
    pub campaign_id: Option<String>,
    pub store_number: Option<String>,
    pub department_id: Option<String>,
    pub existing_card_holder: Option<bool>,
    pub cardholder_tier: Option<String>,
    pub card_env: Option<String>,
    pub channel: Option<String>,
    pub subchannel: Option<String>,
    pub clerk_id: Option<String>,
    pub override_key: Option<String>,
    pub client_variable1: Option<String>,
    pub client_variable2: Option<String>,
    pub client_variable3: Option<String>,
    pub client_variable4: Option<String>,
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub invoice_number: Option<String>,
    pub payment_mode: Option<PaymentMode>,
    /// Provider specific settings forwarded verbatim
    pub provider_config: Option<BTreeMap<String, serde_json::Value>>,
    pub skip_verification: Option<bool>,
    /// Free-form custom variables forwarded verbatim
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}

/// How the buyer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Full,
    Split,
}

/// Buyer identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}
