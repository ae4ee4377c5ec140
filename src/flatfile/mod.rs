//! Flatfile API client module
//!
//! Transport abstraction, response validation, authentication, and the
//! per-resource listing operations.

mod auth;
mod client;
pub mod commands;
pub mod decode;
pub mod environments;
pub mod response;
pub mod spaces;
pub mod users;
pub mod workbooks;

use serde::Deserialize;
use serde_json::Value;

use decode::{require_array, JsonShape};

pub use auth::{create_token, Credentials, TokenResponse};
pub use client::{ApiEnv, FlatfileClient, HttpRequest, HttpTransport, Method, RawResponse};
pub use commands::run_get_command;
pub use environments::{list_environments, Environment};
pub use response::StatusRange;
pub use spaces::{list_spaces, Space};
pub use users::{list_users, User};
pub use workbooks::{list_workbooks, Workbook};

/// Response envelope for listing endpoints (shared across resources)
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T: JsonShape> JsonShape for ListResponse<T> {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(items) = require_array(value, "data", &mut errors) {
            for item in items {
                errors.extend(T::check(item));
            }
        }
        errors
    }
}
