//! Client library for the Payabli payment-processing API.
//!
//! A [`Client`] turns method calls into authenticated HTTP requests:
//!
//! 1. the configuration is resolved once, from defaults and
//!    [`ClientOptions`];
//! 2. request bodies written with snake_case keys are sent as camelCase
//!    JSON, or as a multipart form when files are attached;
//! 3. failures are classified into [`ApiErrorKind`]s by status code, and
//!    successful bodies are parsed as JSON (PDF and ZIP downloads are kept
//!    as bytes);
//! 4. resource calls wrap the parsed body in read-only views such as
//!    [`resource::Charge`] or [`resource::Paypoint`].
//!
//! ```no_run
//! # async fn run() -> payabli_sdk::Result<()> {
//! use payabli_sdk::{Client, ClientOptions};
//! use serde_json::json;
//!
//! let client = Client::new(ClientOptions::new().api_key("my-api-key"))?;
//!
//! let body = json!({
//!     "entry_point": "my-paypoint",
//!     "payment_details": { "total_amount": 100.0 }
//! });
//! let charge = client.create_charge(body.as_object().cloned().unwrap_or_default()).await?;
//! if charge.succeeded() {
//!     println!("charged: {:?}", charge.id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod transform;
pub mod upload;

pub use client::{Body, Client, PaypointLookup, RequestOptions, Response};
pub use config::{AuthMode, ClientOptions, Configuration};
pub use error::{ApiError, ApiErrorKind, ClientError, Result};
pub use upload::Attachment;
