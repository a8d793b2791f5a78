//! Integration tests for the silent prescreen flow.

#[path = "helpers.rs"]
mod helpers;

use std::future::Future;
use std::sync::Mutex;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use helpers::{placement_config, sdk_for, RecordingSink};
use partner_placements::{
    Address, Buyer, LocationType, MerchantConfiguration, MockResponse, PartnerEvent,
    PlacementConfiguration, RtpsData, SdkError, StaticTokenProvider, TransportError,
    VerificationTokenProvider,
};

/// Hands out one token and remembers which site key it was asked for.
#[derive(Default)]
struct RecordingTokenProvider {
    site_keys: Mutex<Vec<Option<String>>>,
}

impl VerificationTokenProvider for RecordingTokenProvider {
    fn verification_token(
        &self,
        site_key: Option<&str>,
    ) -> impl Future<Output = Result<String, SdkError>> + Send {
        self.site_keys
            .lock()
            .unwrap()
            .push(site_key.map(str::to_string));
        async { Ok("fresh-token".to_string()) }
    }
}

fn merchant() -> MerchantConfiguration {
    MerchantConfiguration {
        buyer: Some(Buyer {
            given_name: Some("Carol".to_string()),
            family_name: Some("Jones".to_string()),
            billing_address: Some(Address {
                address1: "3075 Loyalty Cir".to_string(),
                locality: Some("Columbus".to_string()),
                region: Some("OH".to_string()),
                postal_code: Some("43219".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        store_number: Some("2009".to_string()),
        channel: Some("A".to_string()),
        subchannel: Some("B".to_string()),
        ..Default::default()
    }
}

fn rtps_config(prescreen_id: Option<i64>) -> PlacementConfiguration {
    PlacementConfiguration::Rtps(RtpsData {
        location_type: Some(LocationType::Checkout),
        mock_response: Some(MockResponse::Success),
        prescreen_id,
        ..Default::default()
    })
}

#[tokio::test]
async fn test_prescreen_fetches_token_then_posts_identity() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/brands/brand-123/config",
        ))
        .respond_with(json_encoded(json!({"config": {"recaptchaSiteKey": "site-key-1"}}))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/prescreen"),
            request::body(json_decoded(eq(json!({
                "urlPath": "screenname",
                "firstName": "Carol",
                "lastName": "Jones",
                "address1": "3075 Loyalty Cir",
                "city": "OH",
                "state": "Columbus",
                "zip": "43219",
                "storeNumber": "2009",
                "location": "checkout",
                "channel": "A",
                "subchannel": "B",
                "reCaptchaToken": "fresh-token",
                "mockResponse": "success",
                "overrideConfig": {"enhancedPresentment": true}
            })))),
        ])
        .respond_with(json_encoded(json!({"prescreenId": 81234, "returnCode": "00"}))),
    );

    let sdk = sdk_for(&server);
    let recorder = RecordingSink::default();
    let tokens = RecordingTokenProvider::default();
    sdk.silent_rtps_request(&merchant(), &rtps_config(None), &tokens, recorder.sink())
        .await;

    assert_eq!(
        *tokens.site_keys.lock().unwrap(),
        vec![Some("site-key-1".to_string())]
    );
    let events = recorder.terminal_events();
    assert_eq!(events.len(), 1);
    let PartnerEvent::PrescreenResult(result) = &events[0] else {
        panic!("expected prescreen result, got {:?}", events[0]);
    };
    assert_eq!(result.prescreen_id, Some(81234));
    assert_eq!(result.return_code.as_deref(), Some("00"));
}

#[tokio::test]
async fn test_prescreen_with_id_skips_identity_and_token() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/prescreen"),
            request::body(json_decoded(eq(json!({
                "urlPath": "screenname",
                "location": "checkout",
                "channel": "A",
                "subchannel": "B",
                "mockResponse": "success",
                "overrideConfig": {"enhancedPresentment": true},
                "prescreenId": "81234"
            })))),
        ])
        .respond_with(json_encoded(json!({"prescreenId": 81234}))),
    );

    let sdk = sdk_for(&server);
    let recorder = RecordingSink::default();
    let tokens = RecordingTokenProvider::default();
    sdk.silent_rtps_request(
        &merchant(),
        &rtps_config(Some(81234)),
        &tokens,
        recorder.sink(),
    )
    .await;

    assert!(tokens.site_keys.lock().unwrap().is_empty());
    assert!(matches!(
        recorder.terminal_events().as_slice(),
        [PartnerEvent::PrescreenResult(_)]
    ));
}

#[tokio::test]
async fn test_brand_config_failure_stops_prescreen() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/brands/brand-123/config",
        ))
        .respond_with(status_code(401)),
    );

    let sdk = sdk_for(&server);
    let recorder = RecordingSink::default();
    sdk.silent_rtps_request(
        &merchant(),
        &rtps_config(None),
        &StaticTokenProvider("t".to_string()),
        recorder.sink(),
    )
    .await;

    assert_eq!(
        recorder.terminal_events(),
        vec![PartnerEvent::SdkError(SdkError::Transport(
            TransportError::Http { status: 401 }
        ))]
    );
}

#[tokio::test]
async fn test_prescreen_needs_prescreen_configuration() {
    let server = Server::run();
    let sdk = sdk_for(&server);
    let recorder = RecordingSink::default();
    sdk.silent_rtps_request(
        &merchant(),
        &placement_config("abc"),
        &StaticTokenProvider("t".to_string()),
        recorder.sink(),
    )
    .await;

    assert!(matches!(
        recorder.terminal_events().as_slice(),
        [PartnerEvent::SdkError(SdkError::CatchAll { .. })]
    ));
}

#[tokio::test]
async fn test_fetch_brand_config_reads_site_key() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/brands/brand-123/config",
        ))
        .respond_with(json_encoded(json!({"config": {"recaptchaSiteKey": ""}}))),
    );

    let config = sdk_for(&server).fetch_brand_config().await.unwrap();
    assert_eq!(config.verification_site_key(), None);
}

#[tokio::test]
async fn test_fetch_brand_style_returns_raw_json() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/brands/brand-123/style"))
            .respond_with(json_encoded(json!({"primaryColor": "#0055aa"}))),
    );

    let style = sdk_for(&server).fetch_brand_style().await.unwrap();
    assert_eq!(style["primaryColor"], "#0055aa");
}
