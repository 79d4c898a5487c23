//! Boarding applications.

use std::ops::Deref;

use serde_json::Value;

use super::Resource;
use crate::client::{Client, Response};
use crate::error::Result;

/// A boarding application.
///
/// Holds the [`Client`] it was fetched with so [`link_data`](Self::link_data)
/// can request the external application link.
#[derive(Debug, Clone)]
pub struct Application {
    resource: Resource,
    client: Client,
}

impl Application {
    pub fn new(body: &Value, client: Client) -> Self {
        Self {
            resource: Resource::new(body, &[]),
            client,
        }
    }

    pub fn from_response(response: &Response, client: Client) -> Self {
        Self {
            resource: Resource::from_response(response, &[]),
            client,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.resource.id_field("id_application")
    }

    /// Fetch the external link for this application and `email`.
    ///
    /// Issues a network call. Returns `None` without calling the API when
    /// the application has no id.
    pub async fn link_data(&self, email: &str) -> Result<Option<Value>> {
        let Some(id) = self.id() else {
            return Ok(None);
        };
        self.client.get_external_link(&id, email).await
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}

impl Deref for Application {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}
