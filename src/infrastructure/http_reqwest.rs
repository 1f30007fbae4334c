use anyhow::Context;
use log::{debug, warn};
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{HttpClient, NetworkError, StdResult};

const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Issues GET requests with a preconfigured `reqwest` client.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new `ReqwestHttpClient`, authenticated when a token is given.
    pub fn try_new(token: Option<&str>) -> StdResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("gh-followers"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = token {
            let bearer_token = HeaderValue::from_str(&format!("Bearer {token}"))
                .with_context(|| "Invalid GitHub API token")?;
            headers.insert(AUTHORIZATION, bearer_token);
        }
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let url = Url::parse(url).map_err(|e| {
            warn!("Malformed URL '{url}': {e}");
            NetworkError::InvalidUsername
        })?;
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Request to {url} failed: {e}");
            NetworkError::UnableToComplete
        })?;
        if let Some(remaining) = response.headers().get(RATE_LIMIT_REMAINING_HEADER) {
            debug!("RateLimit: remaining={remaining:?}");
        }
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Unexpected status {status} from {url}");
            return Err(NetworkError::InvalidResponse);
        }
        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read body from {url}: {e}");
            NetworkError::InvalidData
        })?;

        Ok(body.to_vec())
    }
}
