//! Response classification and parsing.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Content types passed through as raw bytes.
const BINARY_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/zip"];

/// A parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Decoded JSON. Empty bodies decode to an empty object.
    Json(Value),
    /// Raw bytes of a PDF or ZIP download.
    Binary(Bytes),
}

impl Body {
    pub fn empty() -> Self {
        Self::Json(Value::Object(Map::new()))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Json(_) => None,
        }
    }
}

/// Headers plus parsed body of a successful call.
#[derive(Debug, Clone)]
pub struct Response {
    pub headers: HeaderMap,
    pub body: Body,
}

impl Response {
    pub(crate) async fn from_reqwest(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status();
        let url = resp.url().to_string();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await?;
        classify(status, headers, bytes, &url)
    }

    /// JSON body, if this was not a binary download.
    pub fn json(&self) -> Option<&Value> {
        self.body.as_json()
    }
}

/// Turn a raw HTTP response into a [`Response`] or a classified
/// [`ApiError`].
///
/// Statuses of 400 and above always fail. Below that, PDF and ZIP bodies
/// are kept as bytes, blank bodies become an empty object and anything
/// else must be valid JSON.
pub fn classify(status: StatusCode, headers: HeaderMap, body: Bytes, url: &str) -> Result<Response> {
    if status.as_u16() >= 400 {
        let body = String::from_utf8_lossy(&body).into_owned();
        return Err(ApiError::new(status, body, url).into());
    }

    let body = parse_body(&headers, body)?;
    Ok(Response { headers, body })
}

fn parse_body(headers: &HeaderMap, body: Bytes) -> Result<Body> {
    if is_binary(headers) {
        return Ok(Body::Binary(body));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Body::empty());
    }
    Ok(Body::Json(serde_json::from_slice(&body)?))
}

fn is_binary(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .is_some_and(|mime| BINARY_CONTENT_TYPES.contains(&mime.essence_str()))
}
