// Basearch - GitHub repository browser core
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! HTTP client for the GitHub REST API
//!
//! The client only executes requests and describes the outcome as a
//! [`TransportResponse`]. It does not interpret status codes: that is the
//! classifier's job (`api::response`). Failures to reach the server are
//! returned as classified `BasearchError` transport variants.
//!
//! ## Client Structure
//! `GithubClient` wraps `reqwest::Client` and provides:
//! - Base URL management (public GitHub or an enterprise/mock host)
//! - Custom headers (User-Agent, Accept, Authorization)
//! - Timeout and connection pooling configuration
//!
//! There is no retry: a failed call surfaces once, as data, to the caller.

use crate::api::response::TransportResponse;
use crate::domain::entities::{PullRequest, Repo, SearchResponse};
use crate::error::{BasearchError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Environment variable holding an optional access token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Error body GitHub sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubErrorBody {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl crate::api::envelope::DescribeError for GithubErrorBody {
    fn describe(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// Configuration for GithubClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("basearch-core/", env!("CARGO_PKG_VERSION")).to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Defaults overridden by `GITHUB_API_URL` and `GITHUB_TOKEN`
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(API_URL_ENV) {
            config.api_url = url;
        }
        config.token = non_empty_env(TOKEN_ENV);
        config
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Builder for ClientConfig
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.config.api_url = api_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the GitHub API
///
/// # Example
/// ```rust,no_run
/// use basearch_core::api::client::GithubClient;
///
/// # async fn example() -> basearch_core::error::Result<()> {
/// let client = GithubClient::new()?;
/// let response = client.search_repositories(1, "kotlin").await?;
/// println!("HTTP {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Underlying HTTP client
    client: Client,
    /// API base URL without trailing slash
    base_url: String,
}

impl GithubClient {
    /// Create a new GithubClient with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new GithubClient with custom configuration
    ///
    /// # Errors
    /// Returns error if:
    /// - `api_url` is not an absolute http(s) URL
    /// - user agent or token contain characters not allowed in a header
    /// - HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.api_url)
            .map_err(|e| BasearchError::invalid_config(format!("Invalid API URL '{}': {}", config.api_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BasearchError::invalid_config(format!(
                "Unsupported API URL scheme: {}",
                parsed.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| BasearchError::invalid_config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(ref token) = config.token {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| BasearchError::invalid_config(format!("Invalid token: {}", e)))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(BasearchError::from_transport)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /search/repositories` for one page of repositories in `language`,
    /// most starred first
    pub async fn search_repositories(
        &self,
        page: u32,
        language: &str,
    ) -> Result<TransportResponse<SearchResponse<Repo>>> {
        let query = [
            ("q", format!("language:{}", language)),
            ("sort", "stars".to_string()),
            ("page", page.to_string()),
        ];
        self.get("/search/repositories", &query).await
    }

    /// `GET /repos/{owner}/{repo}/pulls`
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        repo_name: &str,
    ) -> Result<TransportResponse<Vec<PullRequest>>> {
        let endpoint = format!("/repos/{}/{}/pulls", owner, repo_name);
        self.get(&endpoint, &[] as &[(&str, &str)]).await
    }

    /// Perform a GET request with query parameters
    ///
    /// # Errors
    /// Returns a transport variant of `BasearchError` if no response was
    /// received, or `InvalidApiResponse` if a 2xx body does not decode as `T`.
    pub async fn get<T, Q>(&self, endpoint: &str, query: &Q) -> Result<TransportResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(BasearchError::from_transport)?;

        into_transport_response(response).await
    }
}

/// Describe a received response as plain data
///
/// The body of a 2xx response is decoded as `T`; an empty or `null` body
/// leaves it absent. Other responses keep their raw body text.
async fn into_transport_response<T>(response: Response) -> Result<TransportResponse<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), value.to_str().ok().map(str::to_string)))
        .collect();

    let text = response.text().await.map_err(BasearchError::from_transport)?;
    debug!(status = status.as_u16(), bytes = text.len(), "response received");

    let mut transport = TransportResponse {
        status: status.as_u16(),
        status_message: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body: None,
        error_body: None,
    };

    if !status.is_success() {
        transport.error_body = Some(text);
        return Ok(transport);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(transport);
    }

    match serde_json::from_str::<T>(trimmed) {
        Ok(body) => {
            transport.body = Some(body);
            Ok(transport)
        }
        Err(e) => {
            // Keep a short prefix of the body for debugging
            let context: String = trimmed.chars().take(200).collect();
            Err(BasearchError::invalid_response(
                format!("Parse error: {} at line {} col {}", e, e.line(), e.column()),
                Some(context),
            ))
        }
    }
}

// ===== TESTS =====
