//! Error types produced by the Payabli client.
//!
//! HTTP failures reported by the API are classified into an
//! [`ApiErrorKind`] through a fixed status-code table. Everything that
//! prevented a call from completing (timeouts, refused connections,
//! malformed JSON in a successful response) is kept in its own
//! [`ClientError`] variant and never reclassified.

use std::fmt;
use std::path::PathBuf;

use reqwest::StatusCode;

/// Category of an API rejection, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 402
    PaidApiPlanRequired,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 409
    Conflict,
    /// 410
    Gone,
    /// 429
    ExceededRate,
    /// 500
    InternalServerError,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// Any other status at or above 400.
    Unknown,
}

impl ApiErrorKind {
    /// Map a status code to its error kind. Codes outside the table map to
    /// [`ApiErrorKind::Unknown`].
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaidApiPlanRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            409 => Self::Conflict,
            410 => Self::Gone,
            429 => Self::ExceededRate,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::PaidApiPlanRequired => "paid api plan required",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Conflict => "conflict",
            Self::Gone => "gone",
            Self::ExceededRate => "exceeded rate limit",
            Self::InternalServerError => "internal server error",
            Self::BadGateway => "bad gateway",
            Self::ServiceUnavailable => "service unavailable",
            Self::Unknown => "unknown error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request the API answered with a status code of 400 or above.
///
/// The body is kept verbatim; its shape is controlled by the API and may be
/// JSON, HTML from an intermediary, or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (status {status}) at {url}: {body}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: StatusCode,
    pub body: String,
    pub url: String,
}

impl ApiError {
    pub fn new(status: StatusCode, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Parse the raw body as JSON, if it is JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Errors produced by [`Client`](crate::Client) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API rejected the request.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// A local upload path does not point to a file.
    #[error("{} was not found on the filesystem", .0.display())]
    FileNotFound(PathBuf),

    /// An attachment value that cannot be uploaded.
    #[error("{0} is not a supported attachment type, must be a path, an open file or a buffer")]
    NotSupportedType(String),

    /// Transport-level failure (timeout, DNS, TLS, connection refused, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response carried malformed JSON, or a request body
    /// could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint and path could not be combined into a URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// An attachment could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Client options could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The classified kind, when the API rejected the request.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api(err) => Some(err.kind),
            _ => None,
        }
    }

    /// The HTTP status, when the API rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
