//! Boarding application calls.

use serde_json::{Map, Value, json};

use super::{Client, RequestOptions, read_back, with_defaults};
use crate::error::Result;
use crate::resource::{Application, Resource};

impl Client {
    /// `GET /Boarding/read/{id}`.
    pub async fn get_application(&self, id: &str) -> Result<Application> {
        let path = format!("/Boarding/read/{}", urlencoding::encode(id));
        let response = self.get(&path, RequestOptions::new()).await?;
        Ok(Application::from_response(&response, self.clone()))
    }

    /// `POST /Boarding/app`, then read back the created application.
    ///
    /// `org_type` defaults to `0`. If the API does not report success the
    /// create response is returned as is.
    pub async fn create_application(&self, body: Map<String, Value>) -> Result<Application> {
        let body = with_defaults(&[("org_type", json!(0))], body);
        let response = self
            .post("/Boarding/app", RequestOptions::new().body(body))
            .await?;
        let created = Application::from_response(&response, self.clone());
        read_back(created, |id| async move { self.get_application(&id).await }).await
    }

    /// `PUT /Boarding/app/{id}`, then read back the updated application.
    pub async fn update_application(&self, id: &str, body: Map<String, Value>) -> Result<Application> {
        let path = format!("/Boarding/app/{}", urlencoding::encode(id));
        let response = self.put(&path, RequestOptions::new().body(body)).await?;
        let updated = Application::from_response(&response, self.clone());
        read_back(updated, |id| async move { self.get_application(&id).await }).await
    }

    /// `PUT /Boarding/applink/{id}/{email}`, returning the link data.
    pub async fn get_external_link(&self, id: &str, email: &str) -> Result<Option<Value>> {
        let path = format!(
            "/Boarding/applink/{}/{}",
            urlencoding::encode(id),
            urlencoding::encode(email)
        );
        let response = self.put(&path, RequestOptions::new()).await?;
        Ok(Resource::from_response(&response, &[]).response_data().cloned())
    }
}
