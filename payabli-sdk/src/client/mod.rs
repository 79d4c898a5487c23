//! HTTP client for the Payabli API.
//!
//! [`Client`] owns an immutable [`Configuration`] and exposes the four raw
//! verbs ([`get`](Client::get), [`post`](Client::post), [`put`](Client::put),
//! [`delete`](Client::delete)). The resource calls in the submodules are
//! built on top of them.

mod application;
mod charge;
mod method;
mod notification;
mod oauth;
mod organization;
mod paypoint;
mod request;
mod response;

pub use paypoint::PaypointLookup;
pub use request::RequestOptions;
pub use response::{Body, Response, classify};

use std::future::Future;
use std::ops::Deref;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde_json::{Map, Value};
use url::Url;

use crate::config::{AuthMode, ClientOptions, Configuration};
use crate::error::Result;
use crate::resource::Resource;
use crate::transform::{camelize_body, camelize_key};
use crate::upload;

/// Emit a tracing event at a level only known at runtime.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {{
        let level: tracing::Level = $level;
        if level == tracing::Level::ERROR {
            tracing::error!($($arg)+)
        } else if level == tracing::Level::WARN {
            tracing::warn!($($arg)+)
        } else if level == tracing::Level::INFO {
            tracing::info!($($arg)+)
        } else if level == tracing::Level::DEBUG {
            tracing::debug!($($arg)+)
        } else {
            tracing::trace!($($arg)+)
        }
    }};
}

/// Typed HTTP client for the Payabli API.
///
/// Cloning is cheap and clones share the same configuration. To change
/// the configuration, build a new client.
///
/// ```no_run
/// # async fn run() -> payabli_sdk::Result<()> {
/// use payabli_sdk::{Client, ClientOptions};
///
/// let client = Client::new(ClientOptions::new().api_key("my-api-key"))?;
/// let paypoint = client.get_paypoint(payabli_sdk::PaypointLookup::EntryName("my-entry")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<Configuration>,
}

impl Client {
    /// Create a client from the defaults overridden by `options`.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_configuration(Configuration::default().merge(options))
    }

    /// Create a client from a fully resolved configuration.
    ///
    /// Fails if the proxy URI is invalid or the TLS backend cannot be
    /// initialized.
    pub fn with_configuration(config: Configuration) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// `GET {path}`.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.request(Method::GET, path, options).await
    }

    /// `POST {path}`.
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.request(Method::POST, path, options).await
    }

    /// `PUT {path}`.
    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.request(Method::PUT, path, options).await
    }

    /// `DELETE {path}`.
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.request(Method::DELETE, path, options).await
    }

    /// Full URL for a request path.
    ///
    /// Regular paths are appended to `end_point` after `api_version`; OAuth
    /// paths are appended to `oauth_end_point` as they are.
    pub fn request_url(&self, path: &str, oauth_request: bool) -> Result<Url> {
        let raw = if oauth_request {
            format!("{}{path}", self.config.oauth_end_point.trim_end_matches('/'))
        } else {
            format!(
                "{}{}{path}",
                self.config.end_point.trim_end_matches('/'),
                self.config.api_version
            )
        };
        Ok(Url::parse(&raw)?)
    }

    async fn request(&self, method: Method, path: &str, options: RequestOptions) -> Result<Response> {
        let url = self.request_url(path, options.oauth_request)?;
        let auth = self.config.auth_mode(options.no_auth);
        let multipart = options.is_multipart();
        let RequestOptions {
            params,
            body,
            files,
            file_urls,
            ..
        } = options;

        let mut builder = self.http.request(method, url);
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        builder = auth.apply(builder);

        let body = camelize_body(body.as_ref());
        builder = if multipart {
            builder.multipart(upload::build_form(body, files, file_urls).await?)
        } else {
            encode_json(builder, body.as_ref(), auth)?
        };

        let request = builder.build()?;
        if self.config.logging {
            event_at!(
                self.config.log_level,
                method = %request.method(),
                url = %request.url(),
                "payabli request"
            );
        }

        let resp = self.http.execute(request).await?;
        if self.config.logging {
            event_at!(
                self.config.log_level,
                status = resp.status().as_u16(),
                url = %resp.url(),
                "payabli response"
            );
        }

        Response::from_reqwest(resp).await
    }
}

fn encode_json(
    builder: RequestBuilder,
    body: Option<&Map<String, Value>>,
    auth: AuthMode<'_>,
) -> Result<RequestBuilder> {
    match body {
        Some(body) => Ok(builder
            .header(CONTENT_TYPE, auth.json_content_type())
            .body(serde_json::to_vec(body)?)),
        None if matches!(auth, AuthMode::ApiKey(_)) => {
            Ok(builder.header(CONTENT_TYPE, auth.json_content_type()))
        }
        None => Ok(builder),
    }
}

fn build_http_client(config: &Configuration) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .pool_max_idle_per_host(0);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder = match &config.proxy_uri {
        Some(uri) => {
            let mut proxy = reqwest::Proxy::all(uri.as_str())?;
            if let Some(user) = &config.proxy_user {
                proxy = proxy.basic_auth(user, config.proxy_pass.as_deref().unwrap_or_default());
            }
            builder.proxy(proxy)
        }
        None => builder.no_proxy(),
    };

    Ok(builder.build()?)
}

/// Re-read a written record by the id the write returned.
///
/// The write response is returned as is when the API did not report
/// success or gave back no id.
pub(crate) async fn read_back<T, F, Fut>(written: T, read: F) -> Result<T>
where
    T: Deref<Target = Resource>,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if !written.is_success() {
        return Ok(written);
    }
    match written.response_data_id() {
        Some(id) => read(id).await,
        None => Ok(written),
    }
}

/// Fill in defaults for fields the caller did not set, under either their
/// snake_case or camelCase name.
pub(crate) fn with_defaults(defaults: &[(&str, Value)], body: Map<String, Value>) -> Map<String, Value> {
    let mut merged = body;
    for (key, value) in defaults {
        if !merged.contains_key(*key) && !merged.contains_key(&camelize_key(key)) {
            merged.insert((*key).to_owned(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(options: ClientOptions) -> Client {
        Client::new(options).unwrap()
    }

    #[test]
    fn test_request_url_prefixes_api_version() {
        let client = client(ClientOptions::new().end_point("https://host.example/"));
        let url = client.request_url("/MoneyIn/getpaid", false).unwrap();
        assert_eq!(url.as_str(), "https://host.example/api/MoneyIn/getpaid");
    }

    #[test]
    fn test_request_url_oauth_is_verbatim() {
        let client = client(
            ClientOptions::new()
                .oauth_end_point("https://auth.example/oauth")
                .api_version("/v9"),
        );
        let url = client.request_url("/token", true).unwrap();
        assert_eq!(url.as_str(), "https://auth.example/oauth/token");
    }

    #[test]
    fn test_invalid_proxy_is_rejected() {
        let err = Client::new(ClientOptions::new().proxy("http://exa mple.com:3128")).unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_read_back_follows_returned_id() {
        use crate::resource::Organization;

        let written = Organization::new(&json!({ "isSuccess": true, "responseData": 55 }));
        let read = read_back(written, |id| async move {
            assert_eq!(id, "55");
            Ok(Organization::new(&json!({ "idOrg": 55 })))
        })
        .await
        .unwrap();
        assert_eq!(read.id().as_deref(), Some("55"));
    }

    #[tokio::test]
    async fn test_read_back_keeps_write_response() {
        use crate::resource::Organization;

        for body in [
            json!({ "isSuccess": false, "responseData": 55 }),
            json!({ "isSuccess": true, "responseData": { "nested": 1 } }),
        ] {
            let written = Organization::new(&body);
            let result = read_back(written.clone(), |id| async move {
                Err(crate::error::ClientError::Config(format!("unexpected read of {id}")))
            })
            .await
            .unwrap();
            assert_eq!(result, written);
        }
    }

    #[test]
    fn test_with_defaults_lets_caller_override() {
        let body = match json!({ "org_type": 3, "entryPoint": "y", "name": "x" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let merged = with_defaults(
            &[
                ("org_type", json!(0)),
                ("entry_point", json!("default")),
                ("source", json!("api")),
            ],
            body,
        );
        assert_eq!(merged["org_type"], 3);
        assert_eq!(merged["entryPoint"], "y");
        assert!(!merged.contains_key("entry_point"));
        assert_eq!(merged["source"], "api");
        assert_eq!(merged["name"], "x");
    }
}
