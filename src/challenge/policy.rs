//! Navigation policy of a challenge session.
//!
//! `evaluate_navigation` is a pure function of session state and target. It
//! decides; the session applies the resulting transition.

use url::Url;

use crate::config::{TRUSTED_LOCAL_SCHEMES, TRUSTED_NAVIGATION_DOMAINS};

/// Lifecycle phase of a challenge session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionPhase {
    /// The first page has not finished loading
    Loading,
    /// The first page loaded; completion detection is live
    Active,
    /// The challenge redirected back to its entry URL
    Completed,
    /// The user closed the session or navigated away
    Cancelled,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::Cancelled)
    }
}

/// What the policy reads from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Entry URL of the session; a return to it means the challenge passed
    pub original_url: String,
    pub phase: SessionPhase,
}

/// Outcome of evaluating one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum NavigationDecision {
    /// Let the navigation load
    Allow,
    /// Cancel the navigation; the session carries on
    Block,
    /// Cancel the navigation; the challenge has completed
    CompleteChallenge,
    /// Cancel the navigation; the user abandoned the session
    Abandon,
}

impl NavigationDecision {
    /// Whether the renderer may load the target.
    pub fn permits_load(self) -> bool {
        self == NavigationDecision::Allow
    }
}

/// Decides a navigation request against the session's current state.
///
/// # Arguments
///
/// * `state` - Current session state
/// * `target` - Requested URL; `None` or empty when the renderer has none
///
/// # Returns
///
/// - `Block` for every navigation once the session is terminal
/// - in `Active`: `Abandon` for an empty or unparsable target,
///   `CompleteChallenge` for an exact match with the original URL
/// - otherwise `Allow` for trusted domains and local schemes, `Block` for the rest
pub fn evaluate_navigation(state: &SessionState, target: Option<&str>) -> NavigationDecision {
    if state.phase.is_terminal() {
        return NavigationDecision::Block;
    }

    let target = target.map(str::trim).filter(|t| !t.is_empty());
    let parsed = target.and_then(|t| Url::parse(t).ok());

    if state.phase == SessionPhase::Active {
        match (target, &parsed) {
            (None, _) | (_, None) => return NavigationDecision::Abandon,
            (Some(t), Some(_)) if t == state.original_url => {
                return NavigationDecision::CompleteChallenge
            }
            _ => {}
        }
    }

    match parsed {
        Some(url) if is_trusted_destination(&url) => NavigationDecision::Allow,
        _ => NavigationDecision::Block,
    }
}

/// Whether a URL may load inside a challenge session.
///
/// Trusted hosts match on domain boundaries: `comenity.net` admits
/// `acquire1.comenity.net` but not `evilcomenity.net`.
pub fn is_trusted_destination(url: &Url) -> bool {
    if TRUSTED_LOCAL_SCHEMES.contains(&url.scheme()) {
        return true;
    }
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    TRUSTED_NAVIGATION_DOMAINS.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "https://acquire1.comenity.net/prescreen/offer";

    fn state(phase: SessionPhase) -> SessionState {
        SessionState {
            original_url: ORIGINAL.to_string(),
            phase,
        }
    }

    #[test]
    fn test_untrusted_host_blocked_in_every_phase() {
        for phase in [
            SessionPhase::Loading,
            SessionPhase::Active,
            SessionPhase::Completed,
            SessionPhase::Cancelled,
        ] {
            for target in [
                "https://example.com/",
                "https://evilcomenity.net/",
                "https://comenity.net.attacker.io/",
                "javascript:alert(1)",
                "file:///etc/passwd",
            ] {
                assert_eq!(
                    evaluate_navigation(&state(phase), Some(target)),
                    NavigationDecision::Block,
                    "{target} in {phase}"
                );
            }
        }
    }

    #[test]
    fn test_trusted_destinations_allowed() {
        for target in [
            "https://comenity.net/",
            "https://acquire1uat.comenity.net/path",
            "https://www.breadfinancial.com/",
            "https://newassets.hcaptcha.com/captcha/v1/x",
            "https://www.gstatic.com/recaptcha/api.js",
            "data:text/html,<p>hi</p>",
            "about:blank",
        ] {
            assert_eq!(
                evaluate_navigation(&state(SessionPhase::Loading), Some(target)),
                NavigationDecision::Allow,
                "{target}"
            );
        }
    }

    #[test]
    fn test_original_url_completes_only_when_active() {
        assert_eq!(
            evaluate_navigation(&state(SessionPhase::Active), Some(ORIGINAL)),
            NavigationDecision::CompleteChallenge
        );
        assert_eq!(
            evaluate_navigation(&state(SessionPhase::Loading), Some(ORIGINAL)),
            NavigationDecision::Allow
        );
        assert_eq!(
            evaluate_navigation(&state(SessionPhase::Completed), Some(ORIGINAL)),
            NavigationDecision::Block
        );
    }

    #[test]
    fn test_similar_url_is_not_completion() {
        let target = format!("{ORIGINAL}?step=2");
        assert_eq!(
            evaluate_navigation(&state(SessionPhase::Active), Some(&target)),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_empty_target_abandons_when_active() {
        for target in [None, Some(""), Some("   "), Some("::not a url::")] {
            assert_eq!(
                evaluate_navigation(&state(SessionPhase::Active), target),
                NavigationDecision::Abandon,
                "{target:?}"
            );
            assert_eq!(
                evaluate_navigation(&state(SessionPhase::Loading), target),
                NavigationDecision::Block,
                "{target:?}"
            );
        }
    }

    #[test]
    fn test_only_allow_permits_load() {
        assert!(NavigationDecision::Allow.permits_load());
        assert!(!NavigationDecision::Block.permits_load());
        assert!(!NavigationDecision::CompleteChallenge.permits_load());
        assert!(!NavigationDecision::Abandon.permits_load());
    }
}
