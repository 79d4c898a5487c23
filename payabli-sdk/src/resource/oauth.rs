//! OAuth tokens.

use std::ops::Deref;
use std::time::Duration;

use serde_json::Value;

use super::Resource;
use crate::client::Response;

/// Token returned by the OAuth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthToken(Resource);

impl OAuthToken {
    pub fn new(body: &Value) -> Self {
        Self(Resource::new(body, &[]))
    }

    pub fn from_response(response: &Response) -> Self {
        Self(Resource::from_response(response, &[]))
    }

    pub fn access_token(&self) -> Option<&str> {
        self.get_str("access_token")
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.get_str("refresh_token")
    }

    pub fn token_type(&self) -> Option<&str> {
        self.get_str("token_type")
    }

    /// Lifetime of the access token, from `expires_in` seconds.
    pub fn expires_in(&self) -> Option<Duration> {
        self.get_i64("expires_in")
            .and_then(|secs| u64::try_from(secs).ok())
            .map(Duration::from_secs)
    }

    pub fn into_resource(self) -> Resource {
        self.0
    }
}

impl Deref for OAuthToken {
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
    fn test_token_fields() {
        let token = OAuthToken::new(&json!({
            "access_token": "at",
            "refresh_token": "rt",
            "token_type": "Bearer",
            "expires_in": "3600"
        }));
        assert_eq!(token.access_token(), Some("at"));
        assert_eq!(token.refresh_token(), Some("rt"));
        assert_eq!(token.token_type(), Some("Bearer"));
        assert_eq!(token.expires_in(), Some(Duration::from_secs(3600)));
    }
}
