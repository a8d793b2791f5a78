//! Prescreen (RTPS) request construction.

use crate::config::RTPS_URL_PATH;
use crate::models::{MerchantConfiguration, OverrideConfig, RtpsData, RtpsRequest};

/// Builds `POST /api/prescreen` bodies.
///
/// The request takes one of two shapes. Without a prescreen id it carries the
/// buyer's identity and billing address. With one it carries no identity at
/// all, since the service already holds it for that id.
pub struct RtpsRequestBuilder<'a> {
    merchant: &'a MerchantConfiguration,
    rtps: &'a RtpsData,
    verification_token: &'a str,
}

impl<'a> RtpsRequestBuilder<'a> {
    pub fn new(
        merchant: &'a MerchantConfiguration,
        rtps: &'a RtpsData,
        verification_token: &'a str,
    ) -> Self {
        Self {
            merchant,
            rtps,
            verification_token,
        }
    }

    pub fn build(&self) -> RtpsRequest {
        let merchant = self.merchant;
        let shared = RtpsRequest {
            url_path: RTPS_URL_PATH.to_string(),
            location: self.rtps.location_type,
            channel: merchant.channel.clone(),
            subchannel: merchant.subchannel.clone(),
            mock_response: self.rtps.mock_response,
            override_config: OverrideConfig {
                enhanced_presentment: true,
            },
            ..Default::default()
        };

        if let Some(prescreen_id) = self.rtps.prescreen_id {
            return RtpsRequest {
                prescreen_id: Some(prescreen_id.to_string()),
                ..shared
            };
        }

        let buyer = merchant.buyer.as_ref();
        let billing = buyer.and_then(|b| b.billing_address.as_ref());
        // The service reads city from region and state from locality.
        RtpsRequest {
            first_name: buyer.and_then(|b| b.given_name.clone()),
            last_name: buyer.and_then(|b| b.family_name.clone()),
            address1: billing.map(|a| a.address1.clone()),
            city: billing.and_then(|a| a.region.clone()),
            state: billing.and_then(|a| a.locality.clone()),
            zip: billing.and_then(|a| a.postal_code.clone()),
            store_number: merchant.store_number.clone(),
            verification_token: Some(self.verification_token.to_string()),
            ..shared
        }
    }
}
