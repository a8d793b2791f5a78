//! Decoded server responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `POST /generatePlacements`.
///
/// Decoded once per request and handed to exactly one consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementsResponse {
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub placement_content: Vec<PlacementContent>,
}

/// A placement slot returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_context: Option<serde_json::Value>,
}

/// Content for a placement: server-authored HTML plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementContent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_data: Option<ContentData>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl PlacementContent {
    /// HTML payload, or an empty string when the entry carries none.
    pub fn html(&self) -> &str {
        self.content_data
            .as_ref()
            .and_then(|data| data.html_content.as_deref())
            .unwrap_or("")
    }
}

/// Payload of a placement content entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
}

/// Response of `GET /brands/{id}/config`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandConfigResponse {
    #[serde(default)]
    pub config: BTreeMap<String, serde_json::Value>,
}

impl BrandConfigResponse {
    /// Site key of the verification (reCAPTCHA) provider, if configured.
    pub fn verification_site_key(&self) -> Option<&str> {
        self.config
            .get("recaptchaSiteKey")
            .and_then(serde_json::Value::as_str)
            .filter(|key| !key.is_empty())
    }
}

/// Response of `POST /api/prescreen`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpsResponse {
    #[serde(default)]
    pub prescreen_id: Option<i64>,
    #[serde(default)]
    pub return_code: Option<String>,
    /// Any other fields the service returns
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
