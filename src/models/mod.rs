//! Data model.
//!
//! - Host-supplied configuration (merchant, placement, prescreen)
//! - Wire request bodies built from that configuration
//! - Decoded server responses
//! - The structured popup model

mod merchant;
mod placement;
mod popup;
mod request;
mod response;

pub use merchant::{Address, Buyer, MerchantConfiguration, PaymentMode};
pub use placement::{
    CurrencyValue, FinancingType, LocationType, MockResponse, Order, OrderItem, PersonName,
    PickupInformation, PlacementConfiguration, PlacementData, RtpsData,
};
pub use popup::{BodyBlock, PopupPlacementModel, PrimaryActionButton, WebViewPlacement};
pub use request::{
    OverrideConfig, PlacementContext, PlacementRequest, PlacementRequestBody, RtpsRequest,
    TrackingRequest,
};
pub use response::{
    BrandConfigResponse, ContentData, Placement, PlacementContent, PlacementsResponse,
    RtpsResponse,
};
