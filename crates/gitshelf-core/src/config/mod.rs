//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod store;
pub mod upstream;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::store::StoreConfig;
use self::upstream::UpstreamConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files plus the environment overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Shared-secret access settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Upstream repository host settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Share store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public base URL used when building share links (e.g.
    /// `https://files.example.com`). Falls back to the request `Host`
    /// header when unset.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_base_url: None,
        }
    }
}

/// Shared-secret access configuration.
///
/// When `access_token` is unset, the instance is open: every request is
/// authorized. Share-link paths never consult this secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The shared secret compared against the `token` query parameter.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Share link configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Length of generated share ids. Sized so that guessing stays
    /// negligible over a link's lifetime; raise for long-lived deployments.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with environment variables prefixed
    /// with `GITSHELF_` (`__` as the section separator, e.g.
    /// `GITSHELF_UPSTREAM__PAT`).
    pub fn load() -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("GITSHELF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check that the required upstream bindings are present.
    ///
    /// Without an owner and a personal access token no request can be
    /// served, so this runs before the server binds.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.upstream.owner.is_empty() {
            return Err(AppError::configuration(
                "upstream.owner is required (GITSHELF_UPSTREAM__OWNER)",
            ));
        }
        if self.upstream.pat.is_empty() {
            return Err(AppError::configuration(
                "upstream.pat is required (GITSHELF_UPSTREAM__PAT)",
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_id_length() -> usize {
    8
}
