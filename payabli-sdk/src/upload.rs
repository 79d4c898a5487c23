//! File attachments and multipart form assembly.
//!
//! An [`Attachment`] is turned into a `file[i]` part of a
//! `multipart/form-data` request. Its MIME type comes from the file
//! extension and falls back to `application/pdf` when there is none or it
//! is not recognized.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use mime::Mime;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;

use crate::error::{ClientError, Result};
use crate::transform::{index_list, scalar_text};

/// Content type used when none can be derived from a file name.
pub const DEFAULT_MIME: Mime = mime::APPLICATION_PDF;

/// A file to upload with a request.
#[derive(Debug)]
pub enum Attachment {
    /// A path on the local filesystem. Checked for existence before the
    /// request is sent.
    Path(PathBuf),
    /// An already opened file. `file_name` drives MIME detection.
    File {
        file: tokio::fs::File,
        file_name: Option<String>,
    },
    /// An in-memory buffer.
    Buffer {
        data: Bytes,
        file_name: Option<String>,
    },
}

impl Attachment {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn file(file: std::fs::File, file_name: Option<String>) -> Self {
        Self::File {
            file: tokio::fs::File::from_std(file),
            file_name,
        }
    }

    pub fn buffer(data: impl Into<Bytes>) -> Self {
        Self::Buffer {
            data: data.into(),
            file_name: None,
        }
    }

    /// Fail with [`ClientError::FileNotFound`] if this is a path that does
    /// not point to a regular file.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Path(path) if !path.is_file() => Err(ClientError::FileNotFound(path.clone())),
            _ => Ok(()),
        }
    }

    async fn into_part(self) -> Result<Part> {
        let (data, file_name, mime) = match self {
            Self::Path(path) => {
                if !path.is_file() {
                    return Err(ClientError::FileNotFound(path));
                }
                let data = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                let mime = mime_from_name(&path);
                (data, file_name, mime)
            }
            Self::File {
                mut file,
                file_name,
            } => {
                let mut data = Vec::new();
                file.read_to_end(&mut data).await?;
                let mime = file_name
                    .as_deref()
                    .map(|name| mime_from_name(Path::new(name)))
                    .unwrap_or(DEFAULT_MIME);
                (data, file_name, mime)
            }
            Self::Buffer { data, file_name } => (data.to_vec(), file_name, DEFAULT_MIME),
        };

        let mut part = Part::bytes(data).mime_str(mime.as_ref())?;
        if let Some(file_name) = file_name {
            part = part.file_name(file_name);
        }
        Ok(part)
    }
}

impl From<PathBuf> for Attachment {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Attachment {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Bytes> for Attachment {
    fn from(data: Bytes) -> Self {
        Self::buffer(data)
    }
}

impl From<Vec<u8>> for Attachment {
    fn from(data: Vec<u8>) -> Self {
        Self::buffer(data)
    }
}

/// Attachments coming from loosely typed input. Only strings (paths) are
/// accepted.
impl TryFrom<Value> for Attachment {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(Self::Path(PathBuf::from(path))),
            other => Err(ClientError::NotSupportedType(json_type_name(&other).to_owned())),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// MIME type for a file name, by extension.
pub fn mime_from_name(path: &Path) -> Mime {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_MIME;
    };
    match mime_guess::from_ext(ext).first() {
        Some(mime) => mime,
        None => {
            tracing::debug!(extension = ext, "unknown file extension, defaulting to {DEFAULT_MIME}");
            DEFAULT_MIME
        }
    }
}

/// Build the multipart form for a request carrying attachments or file URLs.
///
/// Top-level body fields become text fields, lists are split into indexed
/// `key[i]` fields. Attachments become `file[i]` parts. File URLs become
/// `file_url[i]` text fields and are only used when there are no
/// attachments. Every path is checked before any file is read.
pub(crate) async fn build_form(
    body: Option<Map<String, Value>>,
    files: Vec<Attachment>,
    file_urls: Vec<String>,
) -> Result<Form> {
    for file in &files {
        file.validate()?;
    }

    let mut fields = body.unwrap_or_default();
    let list_keys: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.is_array())
        .map(|(key, _)| key.clone())
        .collect();
    for key in list_keys {
        index_list(&mut fields, &key);
    }

    let mut form = Form::new();
    for (key, value) in fields {
        form = form.text(key, scalar_text(&value));
    }

    if files.is_empty() {
        for (index, url) in file_urls.into_iter().enumerate() {
            form = form.text(format!("file_url[{index}]"), url);
        }
    } else {
        if !file_urls.is_empty() {
            tracing::warn!(
                count = file_urls.len(),
                "file urls are ignored when attachments are present"
            );
        }
        for (index, file) in files.into_iter().enumerate() {
            form = form.part(format!("file[{index}]"), file.into_part().await?);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mime_from_name() {
        assert_eq!(mime_from_name(Path::new("contract.png")), mime::IMAGE_PNG);
        assert_eq!(mime_from_name(Path::new("/tmp/report.txt")), mime::TEXT_PLAIN);
        assert_eq!(mime_from_name(Path::new("dir.v2/no_extension")), DEFAULT_MIME);
        assert_eq!(mime_from_name(Path::new("weird.notarealext")), DEFAULT_MIME);
    }

    #[test]
    fn test_missing_path_fails_validation() {
        let attachment = Attachment::path("/definitely/not/here.pdf");
        match attachment.validate() {
            Err(ClientError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.pdf"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_attachment_from_value() {
        assert!(matches!(
            Attachment::try_from(json!("a.pdf")),
            Ok(Attachment::Path(_))
        ));
        match Attachment::try_from(json!(42)) {
            Err(ClientError::NotSupportedType(kind)) => assert_eq!(kind, "number"),
            other => panic!("expected NotSupportedType, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_build_form_rejects_missing_file_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.pdf");
        std::fs::write(&present, b"%PDF").unwrap();

        let files = vec![
            Attachment::path(&present),
            Attachment::path(dir.path().join("absent.pdf")),
        ];
        let err = build_form(None, files, vec![]).await.unwrap_err();
        assert!(matches!(err, ClientError::FileNotFound(_)));
    }
}
