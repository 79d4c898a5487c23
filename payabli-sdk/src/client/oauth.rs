//! OAuth token calls, sent to the OAuth endpoint.

use serde_json::{Map, Value};

use super::{Client, RequestOptions};
use crate::error::Result;
use crate::resource::OAuthToken;

pub const OAUTH_TOKEN_PATH: &str = "/token";

impl Client {
    /// Exchange an authorization `code` for a token using the configured
    /// client id and secret.
    pub async fn get_oauth_token(&self, code: &str, state: &str) -> Result<OAuthToken> {
        let mut body = Map::new();
        body.insert("state".to_owned(), Value::from(state));
        body.insert("code".to_owned(), Value::from(code));
        body.insert("grant_type".to_owned(), Value::from("authorization_code"));
        if let Some(client_id) = &self.configuration().client_id {
            body.insert("client_id".to_owned(), Value::from(client_id.as_str()));
        }
        if let Some(client_secret) = &self.configuration().client_secret {
            body.insert("client_secret".to_owned(), Value::from(client_secret.as_str()));
        }
        self.request_token(body).await
    }

    /// Trade a refresh token for a new access token.
    pub async fn refresh_oauth_token(&self, refresh_token: &str) -> Result<OAuthToken> {
        let mut body = Map::new();
        body.insert("grant_type".to_owned(), Value::from("refresh_token"));
        body.insert("refresh_token".to_owned(), Value::from(refresh_token));
        self.request_token(body).await
    }

    async fn request_token(&self, body: Map<String, Value>) -> Result<OAuthToken> {
        let options = RequestOptions::new().body(body).oauth_request().no_auth();
        let response = self.post(OAUTH_TOKEN_PATH, options).await?;
        Ok(OAuthToken::from_response(&response))
    }
}
