//! Space listing

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::flatfile::client::ApiEnv;
use crate::flatfile::decode::{require_str, JsonShape};
use crate::flatfile::ListResponse;

/// Space data from the Flatfile API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Space {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "environmentId", skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
}

impl JsonShape for Space {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        require_str(value, "id", &mut errors);
        errors
    }
}

impl Space {
    /// Display name, falling back to the space ID
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// List spaces visible to the authenticated client
pub async fn list_spaces(env: &ApiEnv) -> Result<Vec<Space>> {
    debug!("Listing spaces");
    let response: ListResponse<Space> = env.get_json(api::SPACES).await?;
    Ok(response.data)
}
