//! Payment method calls (`TokenStorage`).

use super::{Client, RequestOptions};
use crate::error::Result;
use crate::resource::Method;

impl Client {
    /// `GET /TokenStorage/{id}`. A blank id returns `None` without a
    /// request.
    pub async fn get_method(&self, id: &str) -> Result<Option<Method>> {
        if id.trim().is_empty() {
            return Ok(None);
        }
        let path = format!("/TokenStorage/{}", urlencoding::encode(id));
        let response = self.get(&path, RequestOptions::new()).await?;
        Ok(Some(Method::from_response(&response)))
    }
}
