//! Workbook listing

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::flatfile::client::ApiEnv;
use crate::flatfile::decode::{require_array, require_str, JsonShape};
use crate::flatfile::ListResponse;

/// Workbook data from the Flatfile API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Workbook {
    pub id: String,
    pub name: String,
    #[serde(rename = "spaceId", skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Record payloads are kept opaque; this client only lists them
    pub records: Vec<Value>,
}

impl JsonShape for Workbook {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        require_str(value, "id", &mut errors);
        require_str(value, "name", &mut errors);
        require_array(value, "records", &mut errors);
        errors
    }
}

/// List workbooks in a space
///
/// Requires an authenticated environment; the bearer token set by the
/// authentication step is attached automatically.
pub async fn list_workbooks(env: &ApiEnv, space_id: &str) -> Result<Vec<Workbook>> {
    let endpoint = format!(
        "{}?spaceId={}",
        api::WORKBOOKS,
        urlencoding::encode(space_id)
    );
    debug!("Listing workbooks for space '{}'", space_id);

    let response: ListResponse<Workbook> = env.get_json(&endpoint).await?;
    Ok(response.data)
}
