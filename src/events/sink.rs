//! Event delivery to the host.

use std::sync::Arc;

use crate::error_handling::SdkError;
use crate::events::PartnerEvent;

/// Receives every event of a flow.
///
/// Events may arrive on any runtime thread.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: PartnerEvent);
}

impl<F> EventSink for F
where
    F: Fn(PartnerEvent) + Send + Sync,
{
    fn on_event(&self, event: PartnerEvent) {
        self(event)
    }
}

/// Error surface of the SDK.
///
/// Logs the failure under a title and reports it to the host as
/// `PartnerEvent::SdkError`. Presenting it (alert, toast) is up to the host.
#[derive(Clone)]
pub struct AlertHandler {
    sink: Arc<dyn EventSink>,
}

impl AlertHandler {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Reports `error` to the host.
    pub fn report_error(&self, title: &str, error: SdkError) {
        log::error!("{}: {}", title, error);
        self.sink.on_event(PartnerEvent::SdkError(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink_receives_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let sink = move |event: PartnerEvent| recorder.lock().unwrap().push(event);
        sink.on_event(PartnerEvent::ChallengeCompleted);
        assert_eq!(*seen.lock().unwrap(), vec![PartnerEvent::ChallengeCompleted]);
    }

    #[test]
    fn test_report_error_emits_one_sdk_error() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let handler = AlertHandler::new(Arc::new(move |event: PartnerEvent| {
            recorder.lock().unwrap().push(event)
        }));
        handler.report_error("Placements", SdkError::PopupParsing);

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], PartnerEvent::SdkError(SdkError::PopupParsing));
        assert!(events[0].is_terminal());
    }
}
