//! Notification calls.

use serde_json::{Map, Value, json};

use super::{Client, RequestOptions, read_back, with_defaults};
use crate::error::Result;
use crate::resource::Notification;

impl Client {
    /// `GET /Notification/{id}`.
    pub async fn get_notification(&self, id: &str) -> Result<Notification> {
        let path = format!("/Notification/{}", urlencoding::encode(id));
        let response = self.get(&path, RequestOptions::new()).await?;
        Ok(Notification::from_response(&response))
    }

    /// `POST /Notification`, then read back the created notification.
    ///
    /// Defaults: `owner_type: 0`, `method: "web"`,
    /// `frequency: "untilcancelled"`, `source: "api"`.
    pub async fn create_notification(&self, body: Map<String, Value>) -> Result<Notification> {
        let body = with_defaults(
            &[
                ("owner_type", json!(0)),
                ("method", json!("web")),
                ("frequency", json!("untilcancelled")),
                ("source", json!("api")),
            ],
            body,
        );
        let response = self
            .post("/Notification", RequestOptions::new().body(body))
            .await?;
        let written = Notification::from_response(&response);
        read_back(written, |id| async move { self.get_notification(&id).await }).await
    }

    /// `PUT /Notification/{id}`, then read back the updated notification.
    pub async fn update_notification(&self, id: &str, body: Map<String, Value>) -> Result<Notification> {
        let path = format!("/Notification/{}", urlencoding::encode(id));
        let response = self.put(&path, RequestOptions::new().body(body)).await?;
        let written = Notification::from_response(&response);
        read_back(written, |id| async move { self.get_notification(&id).await }).await
    }
}
