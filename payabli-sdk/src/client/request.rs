//! Per-request options.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::upload::Attachment;

/// Everything a single call carries besides its method and path.
///
/// ```
/// use payabli_sdk::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .param("limit", 20)
///     .json(&json!({ "entry_point": "my-paypoint" }))
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub(crate) params: Vec<(String, String)>,
    pub(crate) body: Option<Map<String, Value>>,
    pub(crate) files: Vec<Attachment>,
    pub(crate) file_urls: Vec<String>,
    pub(crate) oauth_request: bool,
    pub(crate) no_auth: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Set the body. Keys are camelized before sending.
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the body from any value that serializes to a JSON object.
    /// `null` clears the body.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.body = match serde_json::to_value(value)? {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => {
                return Err(ClientError::Json(<serde_json::Error as serde::ser::Error>::custom(
                    "request body must serialize to a JSON object",
                )));
            }
        };
        Ok(self)
    }

    /// Attach a file. Any attachment switches the request to multipart.
    pub fn file(mut self, file: impl Into<Attachment>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Attach a file given as loosely typed JSON. Only a string path is
    /// accepted; anything else fails with
    /// [`ClientError::NotSupportedType`].
    pub fn try_file(mut self, file: Value) -> Result<Self> {
        self.files.push(Attachment::try_from(file)?);
        Ok(self)
    }

    /// Reference a remote file by URL, sent as a `file_url[i]` form field.
    pub fn file_url(mut self, url: impl Into<String>) -> Self {
        self.file_urls.push(url.into());
        self
    }

    /// Send to the OAuth endpoint, without the API version prefix.
    pub fn oauth_request(mut self) -> Self {
        self.oauth_request = true;
        self
    }

    /// Send without any credentials.
    pub fn no_auth(mut self) -> Self {
        self.no_auth = true;
        self
    }

    pub(crate) fn is_multipart(&self) -> bool {
        !self.files.is_empty() || !self.file_urls.is_empty()
    }
}
