//! Placement request construction.

use crate::config::Environment;
use crate::models::{
    MerchantConfiguration, PlacementContext, PlacementData, PlacementRequest, PlacementRequestBody,
};

/// Builds `POST /generatePlacements` bodies from host configuration.
///
/// Pure: the same inputs always give the same request, and nothing is
/// defaulted. A value missing from the configuration is missing from the
/// request.
pub struct PlacementRequestBuilder<'a> {
    integration_key: &'a str,
    merchant: &'a MerchantConfiguration,
    placement: Option<&'a PlacementData>,
    environment: Environment,
}

impl<'a> PlacementRequestBuilder<'a> {
    pub fn new(
        integration_key: &'a str,
        merchant: &'a MerchantConfiguration,
        placement: Option<&'a PlacementData>,
        environment: Environment,
    ) -> Self {
        Self {
            integration_key,
            merchant,
            placement,
            environment,
        }
    }

    /// Request for the configured placement.
    pub fn build(&self) -> PlacementRequest {
        let body = PlacementRequestBody {
            id: self.placement.and_then(|p| p.placement_id.clone()),
            dom_id: self.placement.and_then(|p| p.dom_id.clone()),
            financing_type: self.placement.and_then(|p| p.financing_type),
            location_type: self.placement.and_then(|p| p.location_type),
            context: Some(self.context()),
        };
        PlacementRequest {
            placements: vec![body],
            brand_id: self.integration_key.to_string(),
        }
    }

    /// Request for the follow-up content of a popup's primary action.
    ///
    /// Carries the same merchant context as `build`, but asks for the
    /// placement named by the action's content-fetch id.
    pub fn build_web_view(&self, content_fetch_id: Option<&str>) -> PlacementRequest {
        PlacementRequest {
            placements: vec![PlacementRequestBody {
                id: content_fetch_id.map(str::to_string),
                context: Some(self.context()),
                ..Default::default()
            }],
            brand_id: self.integration_key.to_string(),
        }
    }

    fn context(&self) -> PlacementContext {
        let merchant = self.merchant;
        let order = self.placement.and_then(|p| p.order.clone());
        let price = order
            .as_ref()
            .and_then(|o| o.total_price.as_ref())
            .map(|total| total.value);

        PlacementContext {
            env: Some(self.environment),
            location: self.placement.and_then(|p| p.location_type),
            price,
            cardholder_tier: merchant.cardholder_tier.clone(),
            store_number: merchant.store_number.clone(),
            loyalty_id: merchant.loyalty_id.clone(),
            campaign_id: merchant.campaign_id.clone(),
            department_id: merchant.department_id.clone(),
            existing_card_holder: merchant.existing_card_holder,
            override_key: merchant.override_key.clone(),
            client_variable1: merchant.client_variable1.clone(),
            client_variable2: merchant.client_variable2.clone(),
            client_variable3: merchant.client_variable3.clone(),
            client_variable4: merchant.client_variable4.clone(),
            channel: merchant.channel.clone(),
            subchannel: merchant.subchannel.clone(),
            buyer: merchant.buyer.clone(),
            order,
            payment_mode: merchant.payment_mode,
            custom: merchant.custom.clone(),
        }
    }
}
