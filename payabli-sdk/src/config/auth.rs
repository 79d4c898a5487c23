//! Authentication selected for a single request.

/// Header carrying the API key.
pub const REQUEST_TOKEN_HEADER: &str = "requestToken";

/// Content type sent with JSON bodies when authenticating by API key.
pub const API_KEY_CONTENT_TYPE: &str = "application/*+json";

/// The one authentication scheme applied to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode<'a> {
    /// No credentials are sent.
    None,
    /// `Authorization: Bearer <token>`.
    Bearer(&'a str),
    /// `requestToken: <key>` with JSON `Accept`/`Content-Type` overrides.
    ApiKey(&'a str),
    /// HTTP basic auth.
    Basic {
        email: &'a str,
        password: Option<&'a str>,
    },
}

impl AuthMode<'_> {
    /// Content type for JSON request bodies under this scheme.
    pub fn json_content_type(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => API_KEY_CONTENT_TYPE,
            _ => "application/json",
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match *self {
            Self::None => request,
            Self::Bearer(token) => request.bearer_auth(token),
            Self::ApiKey(key) => request
                .header(reqwest::header::ACCEPT, "application/json")
                .header(REQUEST_TOKEN_HEADER, key),
            Self::Basic { email, password } => request.basic_auth(email, password),
        }
    }
}
