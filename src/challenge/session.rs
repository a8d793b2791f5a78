//! Challenge session state machine.

use log::{debug, info, warn};

use crate::challenge::{evaluate_navigation, NavigationDecision, SessionPhase, SessionState};

/// State of one supervised web session.
///
/// Transitions happen inside the method that observes the triggering event,
/// so the next navigation is always decided against up-to-date state.
#[derive(Debug, Clone)]
pub struct ChallengeSession {
    state: SessionState,
    load_failures: u32,
}

impl ChallengeSession {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            state: SessionState {
                original_url: original_url.into(),
                phase: SessionPhase::Loading,
            },
            load_failures: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn original_url(&self) -> &str {
        &self.state.original_url
    }

    /// Page loads that failed so far.
    pub fn load_failures(&self) -> u32 {
        self.load_failures
    }

    /// Decides a navigation request and applies its transition.
    pub fn handle_navigation(&mut self, target: Option<&str>) -> NavigationDecision {
        let decision = evaluate_navigation(&self.state, target);
        match decision {
            NavigationDecision::Allow => debug!("Allowing navigation to {:?}", target),
            NavigationDecision::Block => {
                warn!("Blocked navigation to {:?} in phase {}", target, self.state.phase)
            }
            NavigationDecision::CompleteChallenge => {
                info!("Challenge returned to {}", self.state.original_url);
                self.state.phase = SessionPhase::Completed;
            }
            NavigationDecision::Abandon => {
                info!("Challenge session abandoned");
                self.state.phase = SessionPhase::Cancelled;
            }
        }
        decision
    }

    /// Records a finished page load. The first one activates completion detection.
    pub fn page_finished(&mut self) {
        if self.state.phase == SessionPhase::Loading {
            debug!("Challenge page loaded; session active");
            self.state.phase = SessionPhase::Active;
        }
    }

    /// Records a failed page load. The phase does not change; the supervisor
    /// forwards the failure to the host as a log event.
    pub fn record_load_failure(&mut self, message: &str) {
        self.load_failures += 1;
        warn!(
            "Challenge page failed to load in phase {}: {}",
            self.state.phase, message
        );
    }

    /// Handles a user close request.
    ///
    /// Returns `true` if the session was cancelled by this call, `false` if it
    /// had already ended.
    pub fn close(&mut self) -> bool {
        if self.state.phase.is_terminal() {
            return false;
        }
        info!("Challenge session closed by user");
        self.state.phase = SessionPhase::Cancelled;
        true
    }
}
