//! Read-only views over API response bodies.
//!
//! A [`Resource`] keeps two JSON objects: the response envelope (the whole
//! body, carrying `isSuccess`, `responseText`, `responseData`) and the
//! data reached by descending through a list of keys. Field lookups go to
//! the data and never fail; a missing field is `None`.
//!
//! The typed variants fix the keys to descend through and add accessors
//! computed from the same data.

mod application;
mod charge;
mod method;
mod notification;
mod oauth;
mod organization;
mod paypoint;

pub use application::Application;
pub use charge::{Charge, ChargeStatus};
pub use method::Method;
pub use notification::Notification;
pub use oauth::OAuthToken;
pub use organization::Organization;
pub use paypoint::Paypoint;

use serde_json::{Map, Value};

use crate::client::{Body, Response};
use crate::transform::{camelize_key, pascalize_key};

/// Dynamic view over (part of) a response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    envelope: Map<String, Value>,
    data: Map<String, Value>,
}

impl Resource {
    /// Build from a JSON body, descending through `keys` in order.
    ///
    /// A missing key, or a value along the path that is not an object,
    /// yields a resource with no fields.
    pub fn new(body: &Value, keys: &[&str]) -> Self {
        let envelope = body.as_object().cloned().unwrap_or_default();
        let data = keys
            .iter()
            .try_fold(body, |value, key| value.get(*key))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Self { envelope, data }
    }

    /// Build from a response. Binary bodies yield an empty resource.
    pub fn from_response(response: &Response, keys: &[&str]) -> Self {
        match &response.body {
            Body::Json(value) => Self::new(value, keys),
            Body::Binary(_) => Self::default(),
        }
    }

    /// Value of a field, or `None` when it is absent or `null`.
    ///
    /// `name` may be given in snake_case; it is matched against the exact
    /// key, then its camelCase and PascalCase forms.
    pub fn get(&self, name: &str) -> Option<&Value> {
        lookup(&self.data, name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(as_i64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// All fields of the unwrapped data.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole response body, before any key was descended into.
    pub fn envelope(&self) -> &Map<String, Value> {
        &self.envelope
    }

    /// Whether the API flagged the call as successful (`isSuccess: true`).
    pub fn is_success(&self) -> bool {
        lookup(&self.envelope, "is_success")
            .or_else(|| self.get("is_success"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The envelope's `responseText`.
    pub fn response_text(&self) -> Option<&str> {
        lookup(&self.envelope, "response_text").and_then(Value::as_str)
    }

    /// The envelope's `responseData`.
    pub fn response_data(&self) -> Option<&Value> {
        lookup(&self.envelope, "response_data")
    }

    /// `responseData` as an identifier, when it is a string or a number.
    /// Create and update calls return the new id there.
    pub fn response_data_id(&self) -> Option<String> {
        self.response_data().and_then(value_to_id)
    }

    /// A field as an identifier, when it is a non-empty string or a number.
    pub fn id_field(&self, name: &str) -> Option<String> {
        self.get(name).and_then(value_to_id)
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.get(name)
        .or_else(|| map.get(&camelize_key(name)))
        .or_else(|| map.get(&pascalize_key(name)))
        .filter(|value| !value.is_null())
}

/// Integer value of a number or a numeric string.
pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
