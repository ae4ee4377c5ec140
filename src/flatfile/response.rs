//! Response validation layer
//!
//! Checks run in a fixed order: status range, then content type, then body
//! shape. Each earlier failure short-circuits the later, more expensive
//! checks.

use serde_json::Value;

use crate::config::api;
use crate::error::{FlatfileError, Result};
use crate::flatfile::client::RawResponse;
use crate::flatfile::decode::{self, JsonShape};

/// Half-open range of acceptable response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRange {
    pub min_inclusive: u16,
    pub max_exclusive: u16,
}

impl StatusRange {
    /// The usual 2xx success range
    pub const SUCCESS: StatusRange = StatusRange {
        min_inclusive: 200,
        max_exclusive: 300,
    };

    pub fn contains(&self, status: u16) -> bool {
        status >= self.min_inclusive && status < self.max_exclusive
    }
}

/// Validate a raw response and decode its JSON body into `T`
pub fn expect_json<T: JsonShape>(resp: &RawResponse, range: StatusRange) -> Result<T> {
    if !range.contains(resp.status) {
        return Err(FlatfileError::Status {
            status: resp.status,
            min_inclusive: range.min_inclusive,
            max_exclusive: range.max_exclusive,
        });
    }

    let actual = resp.content_type.as_deref().unwrap_or("");
    if !actual.starts_with(api::JSON_CONTENT_TYPE) {
        return Err(FlatfileError::ContentType {
            expected: api::JSON_CONTENT_TYPE.to_string(),
            actual: actual.to_string(),
        });
    }

    let value: Value = serde_json::from_slice(&resp.body).map_err(|e| FlatfileError::Decode {
        errors: vec![format!("body: invalid JSON: {}", e)],
    })?;

    decode::decode(&value)
}
