//! Notifications.

use std::ops::Deref;

use serde_json::Value;

use super::Resource;
use crate::client::Response;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification(Resource);

impl Notification {
    pub fn new(body: &Value) -> Self {
        Self(Resource::new(body, &[]))
    }

    pub fn from_response(response: &Response) -> Self {
        Self(Resource::from_response(response, &[]))
    }

    pub fn id(&self) -> Option<String> {
        self.id_field("notification_id")
    }

    pub fn into_resource(self) -> Resource {
        self.0
    }
}

impl Deref for Notification {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.0
    }
}
