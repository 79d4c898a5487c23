//! Payment charges (`MoneyIn`).
//!
//! A charge comes in two shapes. The full transaction returned by
//! `GET /MoneyIn/details/{id}` carries `TransStatus` and a nested
//! `ResponseData` with the processor text. The result of
//! `POST /MoneyIn/getpaid` carries `resultCode` and `resultText` instead.
//! Status accessors read whichever representation is populated.

use std::ops::Deref;

use serde_json::Value;

use super::{Resource, lookup};
use crate::client::Response;

pub const STATUS_APPROVED: &[i64] = &[1];
pub const STATUS_AUTHORIZED: &[i64] = &[11];
pub const STATUS_DECLINED: &[i64] = &[2, 3];
pub const STATUS_VOIDED: &[i64] = &[5];
pub const STATUS_HELD: &[i64] = &[-5];
pub const STATUS_FAILED: &[i64] = &[-1, 0];

/// Bucket of a numeric charge status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeStatus {
    Approved,
    Authorized,
    Declined,
    Voided,
    Held,
    Failed,
    /// A code outside the known buckets.
    Other(i64),
}

impl ChargeStatus {
    pub fn from_code(code: i64) -> Self {
        if STATUS_APPROVED.contains(&code) {
            Self::Approved
        } else if STATUS_AUTHORIZED.contains(&code) {
            Self::Authorized
        } else if STATUS_DECLINED.contains(&code) {
            Self::Declined
        } else if STATUS_VOIDED.contains(&code) {
            Self::Voided
        } else if STATUS_HELD.contains(&code) {
            Self::Held
        } else if STATUS_FAILED.contains(&code) {
            Self::Failed
        } else {
            Self::Other(code)
        }
    }
}

/// A payment charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Charge(Resource);

impl Charge {
    pub fn new(body: &Value, keys: &[&str]) -> Self {
        Self(Resource::new(body, keys))
    }

    pub fn from_response(response: &Response, keys: &[&str]) -> Self {
        Self(Resource::from_response(response, keys))
    }

    /// `referenceId`, then `paymentTransId`, then a scalar `responseData`.
    pub fn id(&self) -> Option<String> {
        self.id_field("reference_id")
            .or_else(|| self.id_field("payment_trans_id"))
            .or_else(|| self.response_data_id())
    }

    /// Whether this is a full transaction record rather than a charge
    /// result.
    pub fn is_full_charge(&self) -> bool {
        self.get("trans_status").is_some()
    }

    /// `TransStatus` for full charges, `resultCode` otherwise.
    pub fn status(&self) -> Option<i64> {
        if self.is_full_charge() {
            self.get_i64("trans_status")
        } else {
            self.get_i64("result_code")
        }
    }

    pub fn status_kind(&self) -> Option<ChargeStatus> {
        self.status().map(ChargeStatus::from_code)
    }

    /// Processor text for full charges, `resultText` otherwise.
    pub fn status_message(&self) -> Option<&str> {
        if self.is_full_charge() {
            self.get("response_data")
                .and_then(Value::as_object)
                .and_then(|data| lookup(data, "response_code_text"))
                .and_then(Value::as_str)
        } else {
            self.get_str("result_text")
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status_kind() == Some(ChargeStatus::Approved)
    }

    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    pub fn into_resource(self) -> Resource {
        self.0
    }
}

impl Deref for Charge {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.0
    }
}
