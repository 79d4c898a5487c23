//! Organization calls.

use serde_json::{Map, Value, json};

use super::{Client, RequestOptions, read_back};
use crate::error::Result;
use crate::resource::Organization;

impl Client {
    /// `GET /Organization/read/{id}`.
    pub async fn get_organization(&self, id: &str) -> Result<Organization> {
        let path = format!("/Organization/read/{}", urlencoding::encode(id));
        let response = self.get(&path, RequestOptions::new()).await?;
        Ok(Organization::from_response(&response))
    }

    /// `POST /Organization`, then read back the created organization.
    ///
    /// `org_type` is always sent as `0`.
    pub async fn create_organization(&self, mut body: Map<String, Value>) -> Result<Organization> {
        body.remove("orgType");
        body.insert("org_type".to_owned(), json!(0));
        let response = self
            .post("/Organization", RequestOptions::new().body(body))
            .await?;
        let written = Organization::from_response(&response);
        read_back(written, |id| async move { self.get_organization(&id).await }).await
    }

    /// `PUT /Organization/{id}`, then read back the updated organization.
    pub async fn update_organization(&self, id: &str, body: Map<String, Value>) -> Result<Organization> {
        let path = format!("/Organization/{}", urlencoding::encode(id));
        let response = self.put(&path, RequestOptions::new().body(body)).await?;
        let written = Organization::from_response(&response);
        read_back(written, |id| async move { self.get_organization(&id).await }).await
    }
}
