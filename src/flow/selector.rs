//! Presentation path selection for placement responses.

use serde_json::Value;

use crate::error_handling::SdkError;
use crate::events::PartnerEvent;
use crate::flow::decode_json;
use crate::models::{PlacementsResponse, PopupPlacementModel};
use crate::parse::extract_popup_model;

/// How a decoded placement response is shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Auto-opened overlay built from the first content entry
    Overlay(PopupPlacementModel),
    /// Inline text/button content, rendered by the host
    Inline(PlacementsResponse),
}

impl Presentation {
    /// The terminal event announcing this presentation.
    pub fn into_event(self) -> PartnerEvent {
        match self {
            Presentation::Overlay(model) => PartnerEvent::RenderPopup(model),
            Presentation::Inline(response) => PartnerEvent::RenderTextPlacement(response),
        }
    }
}

/// Decodes a raw placement response and picks its presentation.
///
/// With `open_experience` set, the first content entry's HTML must yield a
/// popup model; otherwise the whole response goes to inline rendering.
///
/// # Arguments
///
/// * `raw` - JSON body returned by `/generatePlacements`
/// * `open_experience` - Whether the caller asked for the overlay
///
/// # Errors
///
/// - `SdkError::CatchAll` if `raw` is not a placements response
/// - `SdkError::PopupParsing` if the overlay was requested but there is no
///   content entry or its HTML has no extractable popup
pub fn select_presentation(raw: Value, open_experience: bool) -> Result<Presentation, SdkError> {
    let response: PlacementsResponse = decode_json(raw)?;
    if !open_experience {
        return Ok(Presentation::Inline(response));
    }

    let Some(content) = response.placement_content.first() else {
        log::warn!("Overlay requested but the response has no placement content");
        return Err(SdkError::PopupParsing);
    };
    extract_popup_model(content.html())
        .map(Presentation::Overlay)
        .ok_or(SdkError::PopupParsing)
}
