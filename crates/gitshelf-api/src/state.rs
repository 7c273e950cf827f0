//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gitshelf_core::config::AppConfig;
use gitshelf_service::{AccessService, BrowseService, EditorService, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Repository and directory browsing.
    pub browse_service: Arc<BrowseService>,
    /// File editing and conditional writes.
    pub editor_service: Arc<EditorService>,
    /// Share lifecycle management.
    pub share_service: Arc<ShareService>,
    /// Public share resolution.
    pub access_service: Arc<AccessService>,
}

impl AppState {
    /// The query-string suffix that keeps rendered links authenticated,
    /// empty when no secret is configured.
    pub fn token_query(&self) -> String {
        match &self.config.auth.access_token {
            Some(secret) => format!("?token={secret}"),
            None => String::new(),
        }
    }
}
