//! HTTP method and request body types.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error_handling::TransportError;

/// HTTP methods the transport issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Options,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// A JSON request body.
///
/// Either a loose key/value map or a structured object. Scalars are not
/// accepted as bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Map(Map<String, Value>),
    Json(Value),
}

impl RequestBody {
    /// Builds a body from any serializable value.
    ///
    /// # Errors
    ///
    /// - `TransportError::Serialization` if `value` fails to serialize
    /// - `TransportError::UnsupportedBodyType` if it serializes to a scalar or null
    pub fn serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, TransportError> {
        let json =
            serde_json::to_value(value).map_err(|e| TransportError::Serialization(e.to_string()))?;
        match json {
            Value::Object(map) => Ok(RequestBody::Map(map)),
            Value::Array(_) => Ok(RequestBody::Json(json)),
            _ => Err(TransportError::UnsupportedBodyType),
        }
    }

    /// Serialized bytes sent on the wire.
    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, TransportError> {
        let encoded = match self {
            RequestBody::Map(map) => serde_json::to_vec(map),
            RequestBody::Json(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_vec(value)
            }
            RequestBody::Json(_) => return Err(TransportError::UnsupportedBodyType),
        };
        encoded.map_err(|e| TransportError::Serialization(e.to_string()))
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        RequestBody::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn test_struct_becomes_map() {
        #[derive(Serialize)]
        struct Probe {
            id: u32,
        }
        let body = RequestBody::serializable(&Probe { id: 7 }).unwrap();
        assert_eq!(body.to_bytes().unwrap(), br#"{"id":7}"#.to_vec());
    }

    #[test]
    fn test_scalar_body_is_unsupported() {
        assert_eq!(
            RequestBody::serializable(&42),
            Err(TransportError::UnsupportedBodyType)
        );
        assert_eq!(
            RequestBody::Json(json!("text")).to_bytes(),
            Err(TransportError::UnsupportedBodyType)
        );
    }

    #[test]
    fn test_serialization_failure() {
        let err = RequestBody::serializable(&Unserializable).unwrap_err();
        assert!(matches!(err, TransportError::Serialization(msg) if msg.contains("refused")));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
    }
}
