//! Client for the school's content API.
//!
//! All requests carry the configured bearer token. Upstream 4xx and 5xx are
//! deliberately not distinguished: either way the caller gets an error whose
//! message comes from the upstream `message` field when one is present, and
//! the route turns it into a local 500.

use anyhow::{Result, anyhow};
use log::warn;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

#[derive(Clone)]
pub struct Upstream {
    client: Client,
    base_url: String,
    token: String,
}

impl Upstream {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Upstream {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// GET `{base}{path}` with the given query pairs
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(path, request).await
    }

    /// POST `{base}{path}` with an empty body
    pub async fn post(&self, path: &str) -> Result<Value> {
        let request = self.client.post(self.url(path));
        self.send(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Value> {
        let response = request
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| {
                warn!("request to upstream {} failed: {}", path, err);
                anyhow!("Failed to reach content API")
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| "An error occurred".to_string());
            warn!("upstream {} returned {}: {}", path, status, message);
            return Err(anyhow!(message));
        }

        response.json().await.map_err(|err| {
            warn!("upstream {} sent a malformed body: {}", path, err);
            anyhow!("Invalid response from content API")
        })
    }
}
