//! Stored payment methods (`TokenStorage`).

use std::ops::Deref;

use serde_json::Value;

use super::Resource;
use crate::client::Response;

/// A tokenized payment method. Unwrapped from `responseData`.
#[derive(Debug, Clone, PartialEq)]
pub struct Method(Resource);

impl Method {
    pub const KEYS: &'static [&'static str] = &["responseData"];

    pub fn new(body: &Value) -> Self {
        Self(Resource::new(body, Self::KEYS))
    }

    pub fn from_response(response: &Response) -> Self {
        Self(Resource::from_response(response, Self::KEYS))
    }

    pub fn id(&self) -> Option<String> {
        self.id_field("id_pmethod")
    }

    pub fn into_resource(self) -> Resource {
        self.0
    }
}

impl Deref for Method {
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
    fn test_method_unwraps_response_data() {
        let method = Method::new(&json!({
            "isSuccess": true,
            "responseData": { "idPmethod": "pm-1", "method": "card" }
        }));
        assert_eq!(method.id().as_deref(), Some("pm-1"));
        assert_eq!(method.get_str("method"), Some("card"));
    }
}
