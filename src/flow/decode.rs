//! JSON decode utility.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error_handling::SdkError;

/// Decodes a transport response into a typed model.
///
/// # Errors
///
/// Returns `SdkError::CatchAll` when the JSON does not have the expected
/// shape (wrong types, missing required fields).
pub fn decode_json<T: DeserializeOwned>(value: Value) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| {
        log::warn!("Failed to decode {}: {}", std::any::type_name::<T>(), e);
        SdkError::catch_all(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrandConfigResponse, PlacementsResponse};
    use serde_json::json;

    #[test]
    fn test_decodes_brand_config() {
        let config: BrandConfigResponse =
            decode_json(json!({"config": {"recaptchaSiteKey": "site-key"}})).unwrap();
        assert_eq!(config.verification_site_key(), Some("site-key"));
    }

    #[test]
    fn test_wrong_shape_is_catch_all() {
        let err = decode_json::<PlacementsResponse>(json!({"placements": "nope"})).unwrap_err();
        assert!(matches!(err, SdkError::CatchAll { .. }));
    }
}
