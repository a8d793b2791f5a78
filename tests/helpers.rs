// Shared test helpers for SDK setup, event recording and mock responses.
//
// Included by the integration test files with `#[path = "helpers.rs"] mod helpers;`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use httptest::Server;
use serde_json::{json, Value};

use partner_placements::{
    Endpoints, Environment, EventSink, LogEvent, PartnerEvent, PlacementConfiguration,
    PlacementData, PlacementsSdk, SdkConfig,
};

pub const INTEGRATION_KEY: &str = "brand-123";

/// Collects every event delivered to it.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PartnerEvent>>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl RecordingSink {
    pub fn sink(&self) -> Arc<dyn EventSink> {
        let events = Arc::clone(&self.events);
        Arc::new(move |event: PartnerEvent| events.lock().unwrap().push(event))
    }

    pub fn events(&self) -> Vec<PartnerEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events other than `PartnerEvent::Log`.
    pub fn terminal_events(&self) -> Vec<PartnerEvent> {
        self.events()
            .into_iter()
            .filter(PartnerEvent::is_terminal)
            .collect()
    }

    pub fn log_events(&self) -> Vec<LogEvent> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PartnerEvent::Log(log) => Some(log),
                _ => None,
            })
            .collect()
    }
}

/// Configuration pointing both hosts at the mock server.
#[allow(dead_code)]
pub fn config_for(server: &Server) -> SdkConfig {
    SdkConfig {
        environment: Environment::Stage,
        integration_key: INTEGRATION_KEY.to_string(),
        timeout_seconds: 5,
        completion_grace_delay: Duration::ZERO,
        endpoints: Some(Endpoints::single_host(format!("http://{}", server.addr()))),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn sdk_for(server: &Server) -> PlacementsSdk {
    PlacementsSdk::new(config_for(server)).expect("SDK should initialize")
}

#[allow(dead_code)]
pub fn placement_config(placement_id: &str) -> PlacementConfiguration {
    PlacementConfiguration::Placement(PlacementData {
        placement_id: Some(placement_id.to_string()),
        ..Default::default()
    })
}

/// A `/generatePlacements` response with one content entry.
#[allow(dead_code)]
pub fn placements_response(html: &str) -> Value {
    json!({
        "placements": [{"id": "abc", "placementContentId": "content-1"}],
        "placementContent": [{
            "id": "content-1",
            "contentType": "text/html",
            "contentData": {"htmlContent": html}
        }]
    })
}

#[allow(dead_code)]
pub const POPUP_HTML: &str = r#"
    <h1>Get 10% off</h1>
    <p>Open a card account today.</p>
    <div class="disclosure">Subject to credit approval.</div>
    <button data-content-fetch="fetch-77">See if you Prequalify</button>
"#;
