//! Paypoint calls.

use super::{Client, RequestOptions};
use crate::error::Result;
use crate::resource::Paypoint;

/// How to find a paypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaypointLookup<'a> {
    /// Numeric paypoint id, `GET /Paypoint/basicById/{id}`.
    Id(&'a str),
    /// Entry name, `GET /Paypoint/basic/{entry_name}`.
    EntryName(&'a str),
}

impl Client {
    /// Fetch a paypoint. A blank id or entry name returns `None` without a
    /// request.
    pub async fn get_paypoint(&self, lookup: PaypointLookup<'_>) -> Result<Option<Paypoint>> {
        let path = match lookup {
            PaypointLookup::Id(id) if !id.trim().is_empty() => {
                format!("/Paypoint/basicById/{}", urlencoding::encode(id))
            }
            PaypointLookup::EntryName(entry) if !entry.trim().is_empty() => {
                format!("/Paypoint/basic/{}", urlencoding::encode(entry))
            }
            _ => return Ok(None),
        };
        let response = self.get(&path, RequestOptions::new()).await?;
        Ok(Some(Paypoint::from_response(&response)))
    }
}
