//! Async supervision of a challenge session.
//!
//! The embedded renderer reports what it observes through a
//! `ChallengeHandle`; the supervisor task owns the session, answers each
//! navigation request with a decision, and drives the host view.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::challenge::{ChallengeSession, NavigationDecision, SessionPhase};
use crate::events::{EventSink, LogEvent, PartnerEvent};

/// Buffered renderer events per session.
const CHALLENGE_EVENT_BUFFER: usize = 16;

/// What a challenge session opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeContent {
    /// Server-authored HTML rendered against `base_url`
    Html { html: String, base_url: String },
    /// A follow-up page loaded directly
    Url(String),
}

impl ChallengeContent {
    /// Entry URL of the session. A later navigation back to it completes the
    /// challenge.
    pub fn original_url(&self) -> &str {
        match self {
            ChallengeContent::Html { base_url, .. } => base_url,
            ChallengeContent::Url(url) => url,
        }
    }
}

/// The host view hosting the embedded web session.
pub trait ChallengeHost: Send {
    /// Starts rendering the session's content.
    fn load(&mut self, content: &ChallengeContent);
    /// Tears the view down. Called at most once, when the session ends.
    fn dismiss(&mut self);
}

/// Something the renderer observed.
#[derive(Debug)]
pub enum NavigationEvent {
    /// The page wants to navigate; the renderer waits for `reply`.
    NavigationRequested {
        target: Option<String>,
        reply: oneshot::Sender<NavigationDecision>,
    },
    PageFinished,
    LoadFailed { message: String },
    CloseRequested,
}

/// Renderer-side handle of a running supervisor.
#[derive(Debug, Clone)]
pub struct ChallengeHandle {
    events: mpsc::Sender<NavigationEvent>,
}

impl ChallengeHandle {
    /// Asks whether a navigation may proceed.
    ///
    /// Once the supervisor has stopped every navigation is blocked.
    pub async fn navigate(&self, target: Option<&str>) -> NavigationDecision {
        let (reply, decision) = oneshot::channel();
        let event = NavigationEvent::NavigationRequested {
            target: target.map(str::to_string),
            reply,
        };
        if self.events.send(event).await.is_err() {
            return NavigationDecision::Block;
        }
        decision.await.unwrap_or(NavigationDecision::Block)
    }

    pub async fn page_finished(&self) {
        self.send(NavigationEvent::PageFinished).await;
    }

    pub async fn load_failed(&self, message: impl Into<String>) {
        self.send(NavigationEvent::LoadFailed {
            message: message.into(),
        })
        .await;
    }

    /// User tapped close.
    pub async fn close(&self) {
        self.send(NavigationEvent::CloseRequested).await;
    }

    async fn send(&self, event: NavigationEvent) {
        if self.events.send(event).await.is_err() {
            debug!("Challenge supervisor already stopped; event dropped");
        }
    }
}

/// Owns one challenge session and reports its outcome.
pub struct ChallengeSupervisor {
    session: ChallengeSession,
    content: ChallengeContent,
    host: Box<dyn ChallengeHost>,
    sink: Arc<dyn EventSink>,
    grace_delay: Duration,
}

impl ChallengeSupervisor {
    pub fn new(
        content: ChallengeContent,
        host: Box<dyn ChallengeHost>,
        sink: Arc<dyn EventSink>,
        grace_delay: Duration,
    ) -> Self {
        Self {
            session: ChallengeSession::new(content.original_url()),
            content,
            host,
            sink,
            grace_delay,
        }
    }

    /// Spawns the supervisor on the current runtime.
    ///
    /// The task resolves to the final session phase. It ends when the
    /// session reaches a terminal phase or every handle is dropped.
    pub fn spawn(self) -> (ChallengeHandle, JoinHandle<SessionPhase>) {
        let (events, receiver) = mpsc::channel(CHALLENGE_EVENT_BUFFER);
        let task = tokio::spawn(self.run(receiver));
        (ChallengeHandle { events }, task)
    }

    /// Loads the content and processes renderer events until the session ends.
    ///
    /// # Returns
    ///
    /// The final phase; non-terminal if the renderer went away first.
    pub async fn run(mut self, mut events: mpsc::Receiver<NavigationEvent>) -> SessionPhase {
        self.host.load(&self.content);

        while let Some(event) = events.recv().await {
            match event {
                NavigationEvent::NavigationRequested { target, reply } => {
                    let decision = self.session.handle_navigation(target.as_deref());
                    // Answer first so the renderer cancels before the grace delay
                    if reply.send(decision).is_err() {
                        debug!("Renderer stopped waiting for a navigation decision");
                    }
                    match decision {
                        NavigationDecision::CompleteChallenge => {
                            tokio::time::sleep(self.grace_delay).await;
                            self.sink.on_event(PartnerEvent::ChallengeCompleted);
                            self.host.dismiss();
                            break;
                        }
                        NavigationDecision::Abandon => {
                            self.host.dismiss();
                            break;
                        }
                        NavigationDecision::Allow | NavigationDecision::Block => {}
                    }
                }
                NavigationEvent::PageFinished => self.session.page_finished(),
                NavigationEvent::LoadFailed { message } => {
                    self.session.record_load_failure(&message);
                    self.sink
                        .on_event(PartnerEvent::Log(LogEvent::ChallengeLoadFailed {
                            original_url: self.session.original_url().to_string(),
                            message,
                        }));
                }
                NavigationEvent::CloseRequested => {
                    if self.session.close() {
                        self.sink.on_event(PartnerEvent::ChallengeCancelled);
                        self.host.dismiss();
                        break;
                    }
                }
            }
        }

        let phase = self.session.phase();
        if !phase.is_terminal() {
            debug!("Challenge renderer went away in phase {}", phase);
        }
        phase
    }
}
