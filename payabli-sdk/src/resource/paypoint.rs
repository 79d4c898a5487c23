//! Paypoints: a merchant's payment-acceptance setup.

use std::ops::Deref;

use serde_json::Value;

use super::Resource;
use crate::client::Response;

/// A paypoint. Unwrapped from `responseData.Paypoint`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paypoint(Resource);

impl Paypoint {
    pub const KEYS: &'static [&'static str] = &["responseData", "Paypoint"];

    pub fn new(body: &Value) -> Self {
        Self(Resource::new(body, Self::KEYS))
    }

    pub fn from_response(response: &Response) -> Self {
        Self(Resource::from_response(response, Self::KEYS))
    }

    pub fn id(&self) -> Option<String> {
        self.id_field("id_paypoint")
    }

    pub fn into_resource(self) -> Resource {
        self.0
    }
}

impl Deref for Paypoint {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paypoint_unwraps_two_levels() {
        let paypoint = Paypoint::new(&json!({
            "responseData": {
                "Paypoint": { "IdPaypoint": 77, "DbaName": "Corner Shop" }
            }
        }));
        assert_eq!(paypoint.id().as_deref(), Some("77"));
        assert_eq!(paypoint.get_str("dba_name"), Some("Corner Shop"));
    }

    #[test]
    fn test_paypoint_missing_key_is_empty() {
        let paypoint = Paypoint::new(&json!({ "responseData": {} }));
        assert!(paypoint.is_empty());
        assert!(paypoint.id().is_none());
    }
}
