//! Top-level SDK flows.
//!
//! Each flow issues its requests once, converts every failure into an
//! `SdkError`, and reports exactly one terminal event to the sink it was
//! given. Nothing here panics into the host or retries on its own.

use std::future::Future;
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::builders::{PlacementRequestBuilder, RtpsRequestBuilder};
use crate::challenge::{
    ChallengeContent, ChallengeHandle, ChallengeHost, ChallengeSupervisor, SessionPhase,
};
use crate::config::{ApiUrl, Endpoints, SdkConfig, SDK_ALERT_TITLE};
use crate::error_handling::{InitializationError, SdkError};
use crate::events::{AlertHandler, EventSink, PartnerEvent};
use crate::fetch::{ApiClient, EventLogger, HttpMethod, RequestBody};
use crate::flow::{decode_json, select_presentation, Presentation};
use crate::initialization::init_client;
use crate::models::{
    BrandConfigResponse, LocationType, MerchantConfiguration, PlacementConfiguration,
    PlacementsResponse, PopupPlacementModel, RtpsData, RtpsResponse, TrackingRequest,
    WebViewPlacement,
};
use crate::parse::extract_popup_model;

/// Supplies the bot-verification token a prescreen request carries.
///
/// The host typically runs its reCAPTCHA client with the brand's site key.
pub trait VerificationTokenProvider: Send + Sync {
    fn verification_token(
        &self,
        site_key: Option<&str>,
    ) -> impl Future<Output = Result<String, SdkError>> + Send;
}

/// Hands out a fixed token. For tests and mock-response integrations.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(pub String);

impl VerificationTokenProvider for StaticTokenProvider {
    fn verification_token(
        &self,
        _site_key: Option<&str>,
    ) -> impl Future<Output = Result<String, SdkError>> + Send {
        let token = self.0.clone();
        async move { Ok(token) }
    }
}

/// Entry point of the SDK.
///
/// Cheap to clone; clones share one HTTP connection pool. Flows hold no
/// state between calls, so concurrent flows never observe each other.
#[derive(Clone)]
pub struct PlacementsSdk {
    config: SdkConfig,
    endpoints: Endpoints,
    client: ApiClient,
}

impl PlacementsSdk {
    /// Validates `config` and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// - `InitializationError::ConfigError` if the configuration is invalid
    /// - `InitializationError::HttpClientError` if the client cannot be built
    pub fn new(config: SdkConfig) -> Result<Self, InitializationError> {
        config.validate()?;
        let http = init_client(&config)?;
        info!(
            "Placements SDK ready ({} environment)",
            config.environment
        );
        Ok(Self {
            endpoints: config.endpoints(),
            client: ApiClient::new(http, config.user_agent.clone()),
            config,
        })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Fetches the brand configuration of the integration key.
    pub async fn fetch_brand_config(&self) -> Result<BrandConfigResponse, SdkError> {
        self.brand_config(&self.client).await
    }

    /// Fetches the brand style sheet as raw JSON for the host's theming.
    pub async fn fetch_brand_style(&self) -> Result<Value, SdkError> {
        let url = self
            .endpoints
            .url(&ApiUrl::BrandStyle(self.config.integration_key.clone()));
        Ok(self.client.request(&url, HttpMethod::Get, None, None).await?)
    }

    /// URL of the hosted prescreen page of the given kind.
    ///
    /// Open it with `ChallengeContent::Url` to run the prescreen in a
    /// supervised session.
    pub fn prescreen_web_url(&self, kind: &str) -> String {
        self.endpoints.url(&ApiUrl::RtpsWebUrl(kind.to_string()))
    }

    /// Fetches placements for inline rendering.
    ///
    /// Emits `RenderTextPlacement` with the decoded response, or `SdkError`.
    pub async fn register_placements(
        &self,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        sink: Arc<dyn EventSink>,
    ) {
        self.placements_flow(merchant, placement, false, sink).await;
    }

    /// Fetches a placement and opens its overlay.
    ///
    /// Emits `RenderPopup` with the extracted model, or `SdkError`
    /// (`PopupParsing` when the content has no usable overlay).
    pub async fn open_experience_for_placement(
        &self,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        sink: Arc<dyn EventSink>,
    ) {
        self.placements_flow(merchant, placement, true, sink).await;
    }

    async fn placements_flow(
        &self,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        open_experience: bool,
        sink: Arc<dyn EventSink>,
    ) {
        let client = self.client_for(&sink);
        let alert = AlertHandler::new(Arc::clone(&sink));
        match self
            .fetch_presentation(&client, merchant, placement, open_experience)
            .await
        {
            Ok(presentation) => sink.on_event(presentation.into_event()),
            Err(e) => alert.report_error(SDK_ALERT_TITLE, e),
        }
    }

    async fn fetch_presentation(
        &self,
        client: &ApiClient,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        open_experience: bool,
    ) -> Result<Presentation, SdkError> {
        let request = PlacementRequestBuilder::new(
            &self.config.integration_key,
            merchant,
            placement.placement_data(),
            self.config.environment,
        )
        .build();
        let raw = self
            .post_json(client, &ApiUrl::GeneratePlacements, &request)
            .await?;
        select_presentation(raw, open_experience)
    }

    /// Runs a silent prescreen.
    ///
    /// Without a prescreen id the brand's verification site key is fetched
    /// and `tokens` asked for a fresh token. Emits `PrescreenResult` or
    /// `SdkError`.
    pub async fn silent_rtps_request<P: VerificationTokenProvider>(
        &self,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        tokens: &P,
        sink: Arc<dyn EventSink>,
    ) {
        let client = self.client_for(&sink);
        let alert = AlertHandler::new(Arc::clone(&sink));
        let Some(rtps) = placement.rtps_data() else {
            alert.report_error(
                SDK_ALERT_TITLE,
                SdkError::catch_all("a prescreen needs prescreen configuration"),
            );
            return;
        };
        match self.prescreen(&client, merchant, rtps, tokens).await {
            Ok(response) => sink.on_event(PartnerEvent::PrescreenResult(response)),
            Err(e) => alert.report_error(SDK_ALERT_TITLE, e),
        }
    }

    async fn prescreen<P: VerificationTokenProvider>(
        &self,
        client: &ApiClient,
        merchant: &MerchantConfiguration,
        rtps: &RtpsData,
        tokens: &P,
    ) -> Result<RtpsResponse, SdkError> {
        let token = match rtps.prescreen_id {
            Some(_) => String::new(),
            None => {
                let brand = self.brand_config(client).await?;
                tokens
                    .verification_token(brand.verification_site_key())
                    .await?
            }
        };
        let request = RtpsRequestBuilder::new(merchant, rtps, &token).build();
        let raw = self.post_json(client, &ApiUrl::Prescreen, &request).await?;
        decode_json(raw)
    }

    /// Fetches the follow-up content of a popup's primary action.
    ///
    /// The request carries the original placement context with the action's
    /// content-fetch id as placement id. Failures are reported to `sink` as
    /// `SdkError` and yield `None`; success emits nothing, the content is
    /// returned for the host to open (usually with `open_challenge`).
    pub async fn fetch_web_view_placement(
        &self,
        merchant: &MerchantConfiguration,
        placement: &PlacementConfiguration,
        popup: &PopupPlacementModel,
        sink: Arc<dyn EventSink>,
    ) -> Option<WebViewPlacement> {
        let client = self.client_for(&sink);
        let request = PlacementRequestBuilder::new(
            &self.config.integration_key,
            merchant,
            placement.placement_data(),
            self.config.environment,
        )
        .build_web_view(popup.primary_action.content_fetch_id.as_deref());

        let result = async {
            let raw = self
                .post_json(&client, &ApiUrl::GeneratePlacements, &request)
                .await?;
            let response: PlacementsResponse = decode_json(raw)?;
            let content = response
                .placement_content
                .first()
                .ok_or(SdkError::PopupParsing)?;
            let model = extract_popup_model(content.html()).ok_or(SdkError::PopupParsing)?;
            Ok::<_, SdkError>(WebViewPlacement {
                model,
                html_content: content.html().to_string(),
            })
        }
        .await;

        match result {
            Ok(placement) => Some(placement),
            Err(e) => {
                AlertHandler::new(sink).report_error(SDK_ALERT_TITLE, e);
                None
            }
        }
    }

    /// Reports that a placement was shown. Fire-and-forget.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn track_view(
        &self,
        placement_content_id: &str,
        placement_id: Option<&str>,
        location: Option<LocationType>,
    ) -> JoinHandle<()> {
        self.track(ApiUrl::ViewPlacement, placement_content_id, placement_id, location)
    }

    /// Reports that a placement was tapped. Fire-and-forget.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn track_click(
        &self,
        placement_content_id: &str,
        placement_id: Option<&str>,
        location: Option<LocationType>,
    ) -> JoinHandle<()> {
        self.track(ApiUrl::ClickPlacement, placement_content_id, placement_id, location)
    }

    fn track(
        &self,
        api_url: ApiUrl,
        placement_content_id: &str,
        placement_id: Option<&str>,
        location: Option<LocationType>,
    ) -> JoinHandle<()> {
        let request = TrackingRequest {
            brand_id: self.config.integration_key.clone(),
            placement_content_id: placement_content_id.to_string(),
            placement_id: placement_id.map(str::to_string),
            location,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        let client = self.client.clone();
        let url = self.endpoints.url(&api_url);
        tokio::spawn(async move {
            let result = match RequestBody::serializable(&request) {
                Ok(body) => client
                    .request(&url, HttpMethod::Post, None, Some(body))
                    .await
                    .map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                warn!("Tracking request to {} failed: {}", url, e);
            }
        })
    }

    /// Opens a supervised challenge session on the current runtime.
    ///
    /// The session reports `ChallengeCompleted` (after the configured grace
    /// delay) or `ChallengeCancelled` to `sink`; an abandoned session is
    /// dismissed silently.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn open_challenge(
        &self,
        content: ChallengeContent,
        host: Box<dyn ChallengeHost>,
        sink: Arc<dyn EventSink>,
    ) -> (ChallengeHandle, JoinHandle<SessionPhase>) {
        ChallengeSupervisor::new(content, host, sink, self.config.completion_grace_delay).spawn()
    }

    async fn brand_config(&self, client: &ApiClient) -> Result<BrandConfigResponse, SdkError> {
        let url = self
            .endpoints
            .url(&ApiUrl::BrandConfig(self.config.integration_key.clone()));
        let raw = client.request(&url, HttpMethod::Get, None, None).await?;
        decode_json(raw)
    }

    async fn post_json<T: Serialize>(
        &self,
        client: &ApiClient,
        api_url: &ApiUrl,
        body: &T,
    ) -> Result<Value, SdkError> {
        let body = RequestBody::serializable(body)?;
        let url = self.endpoints.url(api_url);
        Ok(client
            .request(&url, HttpMethod::Post, None, Some(body))
            .await?)
    }

    fn client_for(&self, sink: &Arc<dyn EventSink>) -> ApiClient {
        if self.config.emit_log_events {
            self.client
                .with_logger(Arc::new(EventLogger::new(Arc::clone(sink))))
        } else {
            self.client.clone()
        }
    }
}
