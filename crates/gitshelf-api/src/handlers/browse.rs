//! Repository listing, directory browsing, file proxying, and the editor
//! page.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use gitshelf_core::traits::source::RemoteEntry;
use gitshelf_core::types::VirtualPath;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// Query parameters of the catch-all browse route.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseParams {
    /// `edit=true` opens the editor instead of proxying the file.
    pub edit: Option<String>,
}

/// GET /
pub async fn list_repositories(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let repos = state.browse_service.repositories().await?;
    Ok(Html(views::repositories(&repos, &state.token_query())))
}

/// GET /{*path} — directory listing, raw file proxy, or editor.
pub async fn browse_path(
    State(state): State<AppState>,
    Path(raw_path): Path<String>,
    Query(params): Query<BrowseParams>,
) -> Result<Response, ApiError> {
    let path = VirtualPath::parse(raw_path.trim_end_matches('/'))?;

    if params.edit.as_deref() == Some("true") {
        let file = state.editor_service.fetch_for_edit(&path).await?;
        let page = views::editor(&path, &file, &state.token_query());
        return Ok(Html(page).into_response());
    }

    match state.browse_service.browse(&path).await? {
        RemoteEntry::Listing(entries) => {
            let page = views::listing(&path, &entries, &state.token_query());
            Ok(Html(page).into_response())
        }
        RemoteEntry::File(descriptor) => {
            let stream = state.browse_service.open_file(&descriptor).await?;
            super::proxy_response(stream)
        }
    }
}
