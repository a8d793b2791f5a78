//! Environment selection and endpoint URL construction.
//!
//! The environment is an explicit value carried by `SdkConfig`; it only
//! changes which hosts are used, never request logic.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::constants::{PLACEMENTS_BASE_URL, RTPS_PROD_BASE_URL, RTPS_STAGE_BASE_URL};

/// Target environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    /// User acceptance / staging hosts
    #[strum(serialize = "STAGE")]
    Stage,
    /// Production hosts
    #[default]
    #[strum(serialize = "PROD")]
    Prod,
}

/// Base hosts used to build endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Placement, brand configuration, and tracking host
    pub base_url: String,
    /// Risk prescreen host
    pub rtps_base_url: String,
}

impl Endpoints {
    /// Returns the hosts for the given environment.
    pub fn for_environment(environment: Environment) -> Self {
        let rtps_base_url = match environment {
            Environment::Stage => RTPS_STAGE_BASE_URL,
            Environment::Prod => RTPS_PROD_BASE_URL,
        };
        Self {
            base_url: PLACEMENTS_BASE_URL.to_string(),
            rtps_base_url: rtps_base_url.to_string(),
        }
    }

    /// Points both hosts at a single base URL (mock servers, proxies).
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            rtps_base_url: base_url.clone(),
            base_url,
        }
    }

    /// Builds the full URL for an endpoint.
    pub fn url(&self, api_url: &ApiUrl) -> String {
        let base = self.base_url.trim_end_matches('/');
        let rtps_base = self.rtps_base_url.trim_end_matches('/');
        match api_url {
            ApiUrl::RtpsWebUrl(kind) => format!("{rtps_base}/prescreen/{kind}"),
            ApiUrl::BrandStyle(brand_id) => format!("{base}/brands/{brand_id}/style"),
            ApiUrl::BrandConfig(brand_id) => format!("{base}/brands/{brand_id}/config"),
            ApiUrl::GeneratePlacements => format!("{base}/generatePlacements"),
            ApiUrl::ViewPlacement => format!("{base}/ep/v1/view-placement"),
            ApiUrl::ClickPlacement => format!("{base}/ep/v1/click-placement"),
            ApiUrl::Prescreen => format!("{rtps_base}/api/prescreen"),
        }
    }
}

/// Endpoints the SDK talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiUrl {
    /// Hosted prescreen page of the given kind
    RtpsWebUrl(String),
    /// Brand style sheet
    BrandStyle(String),
    /// Brand configuration (verification site key, feature flags)
    BrandConfig(String),
    /// Placement generation
    GeneratePlacements,
    /// Placement view tracking
    ViewPlacement,
    /// Placement click tracking
    ClickPlacement,
    /// Silent risk prescreen
    Prescreen,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_stage_and_prod_share_placement_host() {
        for environment in Environment::iter() {
            let endpoints = Endpoints::for_environment(environment);
            assert_eq!(
                endpoints.url(&ApiUrl::GeneratePlacements),
                "https://brands.kmsmep.com/generatePlacements"
            );
        }
    }

    #[test]
    fn test_prescreen_host_follows_environment() {
        let stage = Endpoints::for_environment(Environment::Stage);
        let prod = Endpoints::for_environment(Environment::Prod);
        assert_eq!(
            stage.url(&ApiUrl::Prescreen),
            "https://acquire1uat.comenity.net/api/prescreen"
        );
        assert_eq!(
            prod.url(&ApiUrl::Prescreen),
            "https://acquire1.comenity.net/api/prescreen"
        );
    }

    #[test]
    fn test_brand_paths() {
        let endpoints = Endpoints::for_environment(Environment::Prod);
        assert_eq!(
            endpoints.url(&ApiUrl::BrandConfig("key-1".into())),
            "https://brands.kmsmep.com/brands/key-1/config"
        );
        assert_eq!(
            endpoints.url(&ApiUrl::BrandStyle("key-1".into())),
            "https://brands.kmsmep.com/brands/key-1/style"
        );
    }

    #[test]
    fn test_tracking_and_rtps_web_paths() {
        let endpoints = Endpoints::for_environment(Environment::Stage);
        assert_eq!(
            endpoints.url(&ApiUrl::ViewPlacement),
            "https://brands.kmsmep.com/ep/v1/view-placement"
        );
        assert_eq!(
            endpoints.url(&ApiUrl::ClickPlacement),
            "https://brands.kmsmep.com/ep/v1/click-placement"
        );
        assert_eq!(
            endpoints.url(&ApiUrl::RtpsWebUrl("offer".into())),
            "https://acquire1uat.comenity.net/prescreen/offer"
        );
    }

    #[test]
    fn test_single_host_trims_trailing_slash() {
        let endpoints = Endpoints::single_host("http://127.0.0.1:8080/");
        assert_eq!(
            endpoints.url(&ApiUrl::Prescreen),
            "http://127.0.0.1:8080/api/prescreen"
        );
        assert_eq!(
            endpoints.url(&ApiUrl::GeneratePlacements),
            "http://127.0.0.1:8080/generatePlacements"
        );
    }

    #[test]
    fn test_environment_wire_names() {
        assert_eq!(Environment::Stage.to_string(), "STAGE");
        assert_eq!(Environment::Prod.to_string(), "PROD");
        assert_eq!(
            serde_json::to_value(Environment::Stage).unwrap(),
            serde_json::json!("STAGE")
        );
    }
}
