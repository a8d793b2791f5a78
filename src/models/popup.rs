//! Structured overlay content extracted from placement HTML.

use serde::Serialize;

/// Overlay content of a popup placement.
///
/// Only produced by the popup extractor, which refuses to build a model
/// without a primary action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupPlacementModel {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub header: Option<String>,
    pub body: Vec<BodyBlock>,
    pub disclosure: Option<String>,
    pub primary_action: PrimaryActionButton,
}

/// A block of overlay body text, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum BodyBlock {
    /// Section heading
    Heading(String),
    /// Running text
    Paragraph(String),
    /// Short joining text between offers ("or", "and")
    Connector(String),
}

impl BodyBlock {
    pub fn text(&self) -> &str {
        match self {
            BodyBlock::Heading(text) | BodyBlock::Paragraph(text) | BodyBlock::Connector(text) => {
                text
            }
        }
    }
}

/// The overlay's primary call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryActionButton {
    pub label: String,
    /// Placement id to request the follow-up (web-view) content with
    pub content_fetch_id: Option<String>,
    /// Follow-up URL, when the action links out directly
    pub target_url: Option<String>,
}

/// Follow-up content fetched for a popup's primary action.
#[derive(Debug, Clone, PartialEq)]
pub struct WebViewPlacement {
    pub model: PopupPlacementModel,
    /// Raw HTML of the entry, for hosting in a challenge session
    pub html_content: String,
}
