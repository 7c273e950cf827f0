//! Shared-secret auth gate.
//!
//! Every route except the public share path runs behind this middleware.
//! The credential travels as the `token` query parameter so that
//! server-rendered links stay navigable; no session state is kept.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;
use crate::views;

/// Reject requests whose `token` query parameter does not match the
/// configured secret. An instance with no secret configured is open.
///
/// Unauthorized API calls get a machine-readable body; anything
/// browser-navigable gets a re-authentication prompt.
pub async fn require_secret(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(secret) = &state.config.auth.access_token else {
        return next.run(request).await;
    };

    if params.get("token") == Some(secret) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Rejected request with invalid credential");

    if request.uri().path().starts_with("/api/") {
        (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({
                "success": false,
                "error": "FORBIDDEN",
                "message": "Invalid access token",
            })),
        )
            .into_response()
    } else {
        (StatusCode::FORBIDDEN, Html(views::auth_prompt())).into_response()
    }
}
