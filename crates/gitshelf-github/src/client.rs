//! HTTP connection management for the Contents API.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use gitshelf_core::config::upstream::UpstreamConfig;
use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};

/// Thin wrapper around a configured `reqwest::Client`.
///
/// Every request carries the personal access token, the fixed user agent,
/// and the v3 JSON accept header.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Shared HTTP client with default headers attached.
    http: reqwest::Client,
    /// API base URL, without trailing slash.
    api_base: String,
    /// Account owning the browsable repositories.
    owner: String,
}

impl GithubClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("token {}", config.pat))
            .map_err(|e| AppError::configuration(format!("Invalid access token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| AppError::configuration(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
        })
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The configured account name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// URL of the contents endpoint for a virtual path.
    pub fn contents_url(&self, path: &VirtualPath) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, path.repository, path.relative_path
        )
    }

    /// URL of the repository listing endpoint, most recently updated first.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/user/repos?per_page=100&sort=updated&visibility=all&affiliation=owner",
            self.api_base
        )
    }

    /// Map a transport-level failure (DNS, TLS, connect) to an AppError.
    pub fn transport_error(e: reqwest::Error) -> AppError {
        AppError::upstream_unreachable(format!("Upstream unreachable: {e}"))
    }
}
