//! Share admin API and public share access handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, Response};
use validator::Validate;

use gitshelf_core::AppError;

use crate::dto::request::{CreateShareRequest, DeleteShareRequest, ToggleShareRequest};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// POST /api/share/create
pub async fn create_share(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateShareRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let record = state
        .share_service
        .create(&req.full_path, req.unit, req.value)
        .await?;

    let url = format!("{}/s/{}", base_url(&state, &headers), record.id);
    Ok(Json(serde_json::json!({ "success": true, "url": url })))
}

/// POST /api/share/toggle
pub async fn toggle_share(
    State(state): State<AppState>,
    Json(req): Json<ToggleShareRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let found = state.share_service.toggle(&req.id, req.active).await?;
    Ok(Json(serde_json::json!({ "success": found })))
}

/// POST /api/share/delete
pub async fn delete_share(
    State(state): State<AppState>,
    Json(req): Json<DeleteShareRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.share_service.delete(&req.id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /admin/shares
pub async fn share_manager(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = state.share_service.list().await?;
    Ok(Html(views::share_manager(&records, &state.token_query())))
}

/// GET /s/{id} — public share access, no credential.
pub async fn access_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let (_record, stream) = state.access_service.resolve(&id).await?;
    super::proxy_response(stream)
}

/// The base URL for generated share links: configuration first, then the
/// request `Host` header.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.config.server.public_base_url {
        return base.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}
