//! HTTP transport abstraction and reqwest-backed client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::Result;
use crate::flatfile::decode::JsonShape;
use crate::flatfile::response::{self, StatusRange};

/// HTTP method for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single API request, constructed fresh per call
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Build a GET request for the given endpoint path
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Build a POST request with a JSON body
    pub fn post(endpoint: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            endpoint: endpoint.into(),
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// Attach a bearer authorization header
    pub fn bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {}", token)));
        self
    }
}

/// Raw response handed to the validation layer
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Capability interface for sending one API request
///
/// Performs exactly one network attempt; implementations convert every
/// transport-level fault into `FlatfileError::Request`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<RawResponse>;
}

/// Flatfile API client backed by reqwest
pub struct FlatfileClient {
    client: Client,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl FlatfileClient {
    /// Create a new client with sensible connection settings
    pub fn new(host: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}", self.host)
    }
}

#[async_trait]
impl HttpTransport for FlatfileClient {
    async fn send(&self, req: HttpRequest) -> Result<RawResponse> {
        let url = format!("{}/{}", self.base_url(), req.endpoint);
        debug!("{} {}", req.method.as_str(), url);

        let mut builder = match req.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
impl FlatfileClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("mock.flatfile.com".to_string(), base_url.to_string())
    }
}

/// Read-only environment threaded through every pipeline step
///
/// Immutable once constructed; `with_token` derives a new environment after
/// authentication instead of mutating this one.
#[derive(Clone)]
pub struct ApiEnv {
    transport: Arc<dyn HttpTransport>,
    access_token: String,
}

impl ApiEnv {
    /// Create an unauthenticated environment around a transport
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            access_token: String::new(),
        }
    }

    /// Derive an authenticated environment carrying the given token
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            access_token: token.into(),
        }
    }

    /// Current access token (empty before authentication)
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// Send one request through the transport capability
    pub async fn send(&self, req: HttpRequest) -> Result<RawResponse> {
        self.transport.send(req).await
    }

    /// GET an endpoint and validate the response as JSON of type `T`
    ///
    /// Adds the bearer header when a token is present.
    pub async fn get_json<T: JsonShape>(&self, endpoint: &str) -> Result<T> {
        let mut req = HttpRequest::get(endpoint);
        if !self.access_token.is_empty() {
            req = req.bearer(&self.access_token);
        }
        let resp = self.send(req).await?;
        response::expect_json(&resp, StatusRange::SUCCESS)
    }

    /// POST a JSON body to an endpoint and validate the response as `T`
    pub async fn post_json<T: JsonShape>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        let mut req = HttpRequest::post(endpoint, body);
        if !self.access_token.is_empty() {
            req = req.bearer(&self.access_token);
        }
        let resp = self.send(req).await?;
        response::expect_json(&resp, StatusRange::SUCCESS)
    }
}
