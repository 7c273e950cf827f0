//! Upstream repository host configuration.

use serde::{Deserialize, Serialize};

/// Settings for the GitHub Contents API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Account owning the browsable repositories.
    #[serde(default)]
    pub owner: String,
    /// Personal access token used for every upstream request.
    #[serde(default)]
    pub pat: String,
    /// API base URL. Overridable for GitHub Enterprise instances.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// `User-Agent` header sent with every request; GitHub rejects
    /// requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            pat: String::new(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "GitShelf-FileManager".to_string()
}
