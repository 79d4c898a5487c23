//! Client configuration.
//!
//! [`Configuration`] is the fully populated, immutable set of values a
//! [`Client`](crate::Client) runs with. It is produced by merging a
//! partial [`ClientOptions`] over the defaults. Which credentials are used
//! is decided per request by [`Configuration::auth_mode`].

mod auth;
mod options;

pub use auth::{API_KEY_CONTENT_TYPE, AuthMode, REQUEST_TOKEN_HEADER};
pub use options::ClientOptions;

use std::time::Duration;

use tracing::Level;

/// Sandbox host, used unless an endpoint is configured.
pub const DEFAULT_END_POINT: &str = "https://api-sandbox.payabli.com";
pub const DEFAULT_OAUTH_END_POINT: &str = "https://api-sandbox.payabli.com/oauth";
pub const DEFAULT_API_VERSION: &str = "/api";
pub const DEFAULT_USER_AGENT: &str = concat!("payabli-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL for regular API requests.
    pub end_point: String,
    /// Base URL for OAuth requests.
    pub oauth_end_point: String,
    /// Prefix inserted between `end_point` and each request path.
    pub api_version: String,
    pub user_agent: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
    /// Sent in the `requestToken` header.
    pub api_key: Option<String>,
    /// Sent as `Authorization: Bearer …`.
    pub auth_token: Option<String>,
    /// Emit one event per request and per response at `log_level`.
    pub logging: bool,
    pub log_level: Level,
    pub proxy_uri: Option<String>,
    pub proxy_user: Option<String>,
    pub proxy_pass: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            end_point: DEFAULT_END_POINT.to_owned(),
            oauth_end_point: DEFAULT_OAUTH_END_POINT.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            client_id: None,
            client_secret: None,
            email_address: None,
            password: None,
            api_key: None,
            auth_token: None,
            logging: false,
            log_level: Level::INFO,
            proxy_uri: None,
            proxy_user: None,
            proxy_pass: None,
            timeout: None,
        }
    }
}

impl Configuration {
    /// Override every field set in `options`, keeping the rest.
    pub fn merge(&self, options: ClientOptions) -> Self {
        let ClientOptions {
            end_point,
            oauth_end_point,
            api_version,
            user_agent,
            client_id,
            client_secret,
            email_address,
            password,
            api_key,
            auth_token,
            logging,
            log_level,
            proxy_uri,
            proxy_user,
            proxy_pass,
            timeout,
        } = options;

        Self {
            end_point: end_point.unwrap_or_else(|| self.end_point.clone()),
            oauth_end_point: oauth_end_point.unwrap_or_else(|| self.oauth_end_point.clone()),
            api_version: api_version.unwrap_or_else(|| self.api_version.clone()),
            user_agent: user_agent.unwrap_or_else(|| self.user_agent.clone()),
            client_id: client_id.or_else(|| self.client_id.clone()),
            client_secret: client_secret.or_else(|| self.client_secret.clone()),
            email_address: email_address.or_else(|| self.email_address.clone()),
            password: password.or_else(|| self.password.clone()),
            api_key: api_key.or_else(|| self.api_key.clone()),
            auth_token: auth_token.or_else(|| self.auth_token.clone()),
            logging: logging.unwrap_or(self.logging),
            log_level: log_level.unwrap_or(self.log_level),
            proxy_uri: proxy_uri.or_else(|| self.proxy_uri.clone()),
            proxy_user: proxy_user.or_else(|| self.proxy_user.clone()),
            proxy_pass: proxy_pass.or_else(|| self.proxy_pass.clone()),
            timeout: timeout.or(self.timeout),
        }
    }

    /// Select the authentication used for one request.
    ///
    /// Precedence: `no_auth` flag, bearer token, API key, email/password,
    /// then none.
    pub fn auth_mode(&self, no_auth: bool) -> AuthMode<'_> {
        if no_auth {
            AuthMode::None
        } else if let Some(token) = &self.auth_token {
            AuthMode::Bearer(token)
        } else if let Some(key) = &self.api_key {
            AuthMode::ApiKey(key)
        } else if let Some(email) = &self.email_address {
            AuthMode::Basic {
                email,
                password: self.password.as_deref(),
            }
        } else {
            AuthMode::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_only_given_fields() {
        let defaults = Configuration::default();
        let config = defaults.merge(
            ClientOptions::new()
                .api_key("key")
                .end_point("http://localhost:9000")
                .timeout(Duration::from_secs(5)),
        );

        assert_eq!(config.end_point, "http://localhost:9000");
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.oauth_end_point, DEFAULT_OAUTH_END_POINT);
        assert!(!config.logging);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_merge_is_pure() {
        let defaults = Configuration::default();
        let _ = defaults.merge(ClientOptions::new().api_version("/v2"));
        assert_eq!(defaults, Configuration::default());
    }

    #[test]
    fn test_empty_options_yield_defaults() {
        let defaults = Configuration::default();
        assert_eq!(defaults.merge(ClientOptions::default()), defaults);
    }

    #[test]
    fn test_auth_precedence() {
        let config = Configuration::default().merge(
            ClientOptions::new()
                .auth_token("token")
                .api_key("key")
                .email_address("me@example.com")
                .password("pw"),
        );
        assert_eq!(config.auth_mode(false), AuthMode::Bearer("token"));
        assert_eq!(config.auth_mode(true), AuthMode::None);

        let config = Configuration {
            auth_token: None,
            ..config
        };
        assert_eq!(config.auth_mode(false), AuthMode::ApiKey("key"));

        let config = Configuration {
            api_key: None,
            ..config
        };
        assert_eq!(
            config.auth_mode(false),
            AuthMode::Basic {
                email: "me@example.com",
                password: Some("pw")
            }
        );

        assert_eq!(Configuration::default().auth_mode(false), AuthMode::None);
    }
}
