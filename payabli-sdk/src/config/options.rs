//! Caller-supplied client options.
//!
//! Every field is optional; unset fields keep the default. Options can be
//! built in code, parsed from TOML, or read from `PAYABLI_*` environment
//! variables. Unrecognized keys are ignored.

use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::Level;

use crate::error::{ClientError, Result};

/// Partial client configuration, merged over the defaults by
/// [`Configuration::merge`](super::Configuration::merge).
///
/// In TOML, `timeout` is a number of seconds and `log_level` one of
/// `trace`, `debug`, `info`, `warn`, `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub end_point: Option<String>,
    pub oauth_end_point: Option<String>,
    pub api_version: Option<String>,
    pub user_agent: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
    pub api_key: Option<String>,
    pub auth_token: Option<String>,
    pub logging: Option<bool>,
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: Option<Level>,
    pub proxy_uri: Option<String>,
    pub proxy_user: Option<String>,
    pub proxy_pass: Option<String>,
    #[serde(deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,
}

/// Prefix of the environment variables read by [`ClientOptions::from_env`].
pub const ENV_PREFIX: &str = "PAYABLI_";

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    ///
    /// ```
    /// use payabli_sdk::ClientOptions;
    ///
    /// let options = ClientOptions::from_toml_str(r#"
    /// api_key = "secret"
    /// timeout = 30
    /// "#).unwrap();
    /// assert_eq!(options.api_key.as_deref(), Some("secret"));
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Read options from `PAYABLI_*` environment variables, e.g.
    /// `PAYABLI_API_KEY` or `PAYABLI_TIMEOUT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(&format!("{ENV_PREFIX}{}", key.to_ascii_uppercase()));

        let logging = match var("logging") {
            Some(value) => Some(parse_bool(&value).ok_or_else(|| {
                ClientError::Config(format!("{ENV_PREFIX}LOGGING: invalid boolean {value:?}"))
            })?),
            None => None,
        };
        let log_level = match var("log_level") {
            Some(value) => Some(value.parse::<Level>().map_err(|_| {
                ClientError::Config(format!("{ENV_PREFIX}LOG_LEVEL: invalid level {value:?}"))
            })?),
            None => None,
        };
        let timeout = match var("timeout") {
            Some(value) => Some(parse_seconds(&value).ok_or_else(|| {
                ClientError::Config(format!("{ENV_PREFIX}TIMEOUT: invalid seconds {value:?}"))
            })?),
            None => None,
        };

        Ok(Self {
            end_point: var("end_point"),
            oauth_end_point: var("oauth_end_point"),
            api_version: var("api_version"),
            user_agent: var("user_agent"),
            client_id: var("client_id"),
            client_secret: var("client_secret"),
            email_address: var("email_address"),
            password: var("password"),
            api_key: var("api_key"),
            auth_token: var("auth_token"),
            logging,
            log_level,
            proxy_uri: var("proxy_uri"),
            proxy_user: var("proxy_user"),
            proxy_pass: var("proxy_pass"),
            timeout,
        })
    }

    pub fn end_point(mut self, value: impl Into<String>) -> Self {
        self.end_point = Some(value.into());
        self
    }

    pub fn oauth_end_point(mut self, value: impl Into<String>) -> Self {
        self.oauth_end_point = Some(value.into());
        self
    }

    pub fn api_version(mut self, value: impl Into<String>) -> Self {
        self.api_version = Some(value.into());
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.user_agent = Some(value.into());
        self
    }

    /// OAuth application credentials.
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn email_address(mut self, value: impl Into<String>) -> Self {
        self.email_address = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(value.into());
        self
    }

    pub fn auth_token(mut self, value: impl Into<String>) -> Self {
        self.auth_token = Some(value.into());
        self
    }

    /// Turn request/response logging on at the given level.
    pub fn logging(mut self, level: Level) -> Self {
        self.logging = Some(true);
        self.log_level = Some(level);
        self
    }

    pub fn proxy(mut self, uri: impl Into<String>) -> Self {
        self.proxy_uri = Some(uri.into());
        self
    }

    pub fn proxy_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.proxy_user = Some(user.into());
        self.proxy_pass = Some(pass.into());
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_seconds(value: &str) -> Option<Duration> {
    let secs: f64 = value.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    value
        .parse::<Level>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid log level {value:?}")))
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid timeout {secs}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
end_point = "https://api.payabli.com"
api_key = "abc"
logging = true
log_level = "debug"
timeout = 2.5
proxy_uri = "http://proxy.local:3128"
some_future_option = "ignored"
"#;
        let options = ClientOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(options.end_point.as_deref(), Some("https://api.payabli.com"));
        assert_eq!(options.api_key.as_deref(), Some("abc"));
        assert_eq!(options.logging, Some(true));
        assert_eq!(options.log_level, Some(Level::DEBUG));
        assert_eq!(options.timeout, Some(Duration::from_millis(2500)));
        assert_eq!(options.proxy_uri.as_deref(), Some("http://proxy.local:3128"));
        assert!(options.auth_token.is_none());
    }

    #[test]
    fn test_toml_invalid_level() {
        let err = ClientOptions::from_toml_str(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_env_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PAYABLI_AUTH_TOKEN", "tok"),
            ("PAYABLI_LOGGING", "yes"),
            ("PAYABLI_LOG_LEVEL", "warn"),
            ("PAYABLI_TIMEOUT", "10"),
        ]);
        let options = ClientOptions::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(options.auth_token.as_deref(), Some("tok"));
        assert_eq!(options.logging, Some(true));
        assert_eq!(options.log_level, Some(Level::WARN));
        assert_eq!(options.timeout, Some(Duration::from_secs(10)));
        assert!(options.api_key.is_none());
    }

    #[test]
    fn test_env_invalid_timeout() {
        let err = ClientOptions::from_lookup(|name| {
            (name == "PAYABLI_TIMEOUT").then(|| "soon".to_owned())
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
