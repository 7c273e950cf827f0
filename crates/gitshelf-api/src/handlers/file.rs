//! File update handler — the optimistic-concurrency write endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::Validate;

use gitshelf_core::AppError;
use gitshelf_core::traits::source::WriteOutcome;
use gitshelf_core::types::VirtualPath;

use crate::dto::request::UpdateFileRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/file/update
///
/// A stale version token is not an error: the conflict comes back as a
/// structured failure carrying the upstream status and message, and the
/// caller decides whether to re-fetch and retry.
pub async fn update_file(
    State(state): State<AppState>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Response, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let path = VirtualPath::parse(&format!("{}/{}", req.repo, req.path))?;

    match state
        .editor_service
        .write(&path, &req.sha, &req.content)
        .await?
    {
        WriteOutcome::Committed => {
            Ok(Json(serde_json::json!({ "success": true })).into_response())
        }
        WriteOutcome::Conflict { status, message } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::CONFLICT);
            let body = Json(serde_json::json!({ "success": false, "message": message }));
            Ok((code, body).into_response())
        }
    }
}
