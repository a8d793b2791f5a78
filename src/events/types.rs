//! Host-visible events.

use crate::error_handling::SdkError;
use crate::fetch::{RequestLog, ResponseLog};
use crate::models::{PlacementsResponse, PopupPlacementModel, RtpsResponse};

/// Everything the SDK reports to the host.
///
/// Each top-level flow delivers exactly one terminal event (every variant
/// except `Log`). Hosts should match exhaustively so a new variant is a
/// compile error rather than a silently ignored event.
#[derive(Debug, Clone, PartialEq)]
pub enum PartnerEvent {
    /// Decoded placements for the host's inline text/button rendering
    RenderTextPlacement(PlacementsResponse),
    /// Overlay content ready to present
    RenderPopup(PopupPlacementModel),
    /// The supervised challenge redirected back to its entry URL
    ChallengeCompleted,
    /// The user closed the challenge session
    ChallengeCancelled,
    /// Outcome of a silent prescreen
    PrescreenResult(RtpsResponse),
    /// A flow failed
    SdkError(SdkError),
    /// Transport traffic or a challenge diagnostic
    Log(LogEvent),
}

impl PartnerEvent {
    /// Whether this event ends the flow that emitted it.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PartnerEvent::Log(_))
    }
}

/// Diagnostics forwarded to the host. None of these end a flow.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    Request(RequestLog),
    Response(ResponseLog),
    /// A page inside a challenge session failed to load; the session goes on
    ChallengeLoadFailed { original_url: String, message: String },
}
