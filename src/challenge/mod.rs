//! Web challenge supervision.
//!
//! This module supervises an embedded web session hosting a third-party
//! challenge:
//! - **Policy**: pure allow/block/complete/abandon decision per navigation
//! - **Session**: the `Loading -> Active -> Completed | Cancelled` state machine
//! - **Supervisor**: async task applying decisions and emitting host events

mod policy;
mod session;
mod supervisor;

// Re-export public API
pub use policy::{
    evaluate_navigation, is_trusted_destination, NavigationDecision, SessionPhase, SessionState,
};
pub use session::ChallengeSession;
pub use supervisor::{
    ChallengeContent, ChallengeHandle, ChallengeHost, ChallengeSupervisor, NavigationEvent,
};
