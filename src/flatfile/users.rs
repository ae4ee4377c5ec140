//! User listing

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::flatfile::client::ApiEnv;
use crate::flatfile::decode::{require_str, JsonShape};
use crate::flatfile::ListResponse;

/// User data from the Flatfile API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl JsonShape for User {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        require_str(value, "id", &mut errors);
        require_str(value, "email", &mut errors);
        errors
    }
}

impl User {
    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// List users visible to the authenticated client
pub async fn list_users(env: &ApiEnv) -> Result<Vec<User>> {
    debug!("Listing users");
    let response: ListResponse<User> = env.get_json(api::USERS).await?;
    Ok(response.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlatfileError;
    use crate::flatfile::client::FlatfileClient;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn authed_env(base_url: &str) -> ApiEnv {
        ApiEnv::new(Arc::new(FlatfileClient::test_client(base_url))).with_token("tok-1")
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            id: "us-1".to_string(),
            email: "a@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "a@example.com");

        let named = User {
            name: Some("Ada".to_string()),
            ..user
        };
        assert_eq!(named.display_name(), "Ada");
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mock_server = MockServer::start().await;
        let env = authed_env(&mock_server.uri());

        let response_body = serde_json::json!({
            "data": [
                {"id": "us-1", "email": "a@example.com", "name": "Ada"},
                {"id": "us-2", "email": "b@example.com"}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let users = list_users(&env).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].display_name(), "Ada");
        assert_eq!(users[1].display_name(), "b@example.com");
    }

    #[tokio::test]
    async fn test_list_users_missing_email() {
        let mock_server = MockServer::start().await;
        let env = authed_env(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"data": [{"id": "us-1"}]}),
            ))
            .mount(&mock_server)
            .await;

        let err = list_users(&env).await.unwrap_err();
        assert_eq!(
            err,
            FlatfileError::Decode {
                errors: vec!["email: required".to_string()],
            }
        );
    }
}
