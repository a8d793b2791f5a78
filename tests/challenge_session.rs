//! Integration tests for challenge supervision through the public SDK API.

#[path = "helpers.rs"]
mod helpers;

use std::sync::{Arc, Mutex};

use httptest::Server;

use helpers::{sdk_for, RecordingSink};
use partner_placements::{
    ChallengeContent, ChallengeHost, LogEvent, NavigationDecision, PartnerEvent, SessionPhase,
};

const ENTRY_URL: &str = "https://acquire1uat.comenity.net/prescreen/offer";

#[derive(Default)]
struct ViewState {
    loaded: Vec<ChallengeContent>,
    dismissed: usize,
}

struct FakeWebView(Arc<Mutex<ViewState>>);

impl ChallengeHost for FakeWebView {
    fn load(&mut self, content: &ChallengeContent) {
        self.0.lock().unwrap().loaded.push(content.clone());
    }

    fn dismiss(&mut self) {
        self.0.lock().unwrap().dismissed += 1;
    }
}

fn html_content() -> ChallengeContent {
    ChallengeContent::Html {
        html: "<form><button>Continue</button></form>".to_string(),
        base_url: ENTRY_URL.to_string(),
    }
}

#[tokio::test]
async fn test_round_trip_through_captcha_completes() {
    let server = Server::run();
    let sdk = sdk_for(&server);
    let view = Arc::new(Mutex::new(ViewState::default()));
    let recorder = RecordingSink::default();
    let (handle, task) = sdk.open_challenge(
        html_content(),
        Box::new(FakeWebView(Arc::clone(&view))),
        recorder.sink(),
    );

    assert_eq!(
        handle.navigate(Some("about:blank")).await,
        NavigationDecision::Allow
    );
    handle.page_finished().await;
    for hop in [
        "https://www.gstatic.com/recaptcha/releases/api.js",
        "https://newassets.hcaptcha.com/captcha/v1/challenge",
        "https://www.breadfinancial.com/verify",
    ] {
        assert_eq!(handle.navigate(Some(hop)).await, NavigationDecision::Allow);
    }
    assert_eq!(
        handle.navigate(Some("https://tracker.example.net/pixel")).await,
        NavigationDecision::Block
    );
    handle.load_failed("net::ERR_BLOCKED_BY_CLIENT").await;
    assert_eq!(
        handle.navigate(Some(ENTRY_URL)).await,
        NavigationDecision::CompleteChallenge
    );

    assert_eq!(task.await.unwrap(), SessionPhase::Completed);
    assert_eq!(
        recorder.terminal_events(),
        vec![PartnerEvent::ChallengeCompleted]
    );
    assert_eq!(
        recorder.log_events(),
        vec![LogEvent::ChallengeLoadFailed {
            original_url: ENTRY_URL.to_string(),
            message: "net::ERR_BLOCKED_BY_CLIENT".to_string(),
        }]
    );
    let view = view.lock().unwrap();
    assert_eq!(view.loaded, vec![html_content()]);
    assert_eq!(view.dismissed, 1);
}

#[tokio::test]
async fn test_entry_url_during_loading_just_loads() {
    let server = Server::run();
    let sdk = sdk_for(&server);
    let view = Arc::new(Mutex::new(ViewState::default()));
    let recorder = RecordingSink::default();
    let (handle, task) = sdk.open_challenge(
        ChallengeContent::Url(ENTRY_URL.to_string()),
        Box::new(FakeWebView(Arc::clone(&view))),
        recorder.sink(),
    );

    assert_eq!(
        handle.navigate(Some(ENTRY_URL)).await,
        NavigationDecision::Allow
    );
    assert_eq!(handle.navigate(None).await, NavigationDecision::Block);
    handle.close().await;

    assert_eq!(task.await.unwrap(), SessionPhase::Cancelled);
    assert_eq!(
        recorder.terminal_events(),
        vec![PartnerEvent::ChallengeCancelled]
    );
    assert_eq!(view.lock().unwrap().dismissed, 1);
}

#[tokio::test]
async fn test_abandoned_session_is_silent() {
    let server = Server::run();
    let sdk = sdk_for(&server);
    let view = Arc::new(Mutex::new(ViewState::default()));
    let recorder = RecordingSink::default();
    let (handle, task) = sdk.open_challenge(
        ChallengeContent::Url(ENTRY_URL.to_string()),
        Box::new(FakeWebView(Arc::clone(&view))),
        recorder.sink(),
    );

    handle.page_finished().await;
    assert_eq!(handle.navigate(Some("")).await, NavigationDecision::Abandon);
    // Close after the session ended has no effect
    handle.close().await;

    assert_eq!(task.await.unwrap(), SessionPhase::Cancelled);
    assert!(recorder.events().is_empty());
    assert_eq!(view.lock().unwrap().dismissed, 1);
}
