//! Environment listing

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::flatfile::client::ApiEnv;
use crate::flatfile::decode::{require_str, JsonShape};
use crate::flatfile::ListResponse;

/// Environment data from the Flatfile API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Environment {
    pub id: String,
    pub name: String,
    #[serde(rename = "isProd", skip_serializing_if = "Option::is_none")]
    pub is_prod: Option<bool>,
}

impl JsonShape for Environment {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        require_str(value, "id", &mut errors);
        require_str(value, "name", &mut errors);
        errors
    }
}

/// List environments visible to the authenticated client
pub async fn list_environments(env: &ApiEnv) -> Result<Vec<Environment>> {
    debug!("Listing environments");
    let response: ListResponse<Environment> = env.get_json(api::ENVIRONMENTS).await?;
    Ok(response.data)
}
