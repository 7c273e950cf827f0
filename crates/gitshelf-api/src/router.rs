//! Route definitions for the GitShelf HTTP surface.
//!
//! The public share route is mounted outside the auth gate; everything
//! else — pages and the admin JSON API — runs behind it.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    // Possession of the share id is the only access control here.
    let public_routes =
        Router::new().route("/s/{id}", get(handlers::share::access_share));

    let gated_routes = Router::new()
        .merge(api_routes())
        .merge(page_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_secret,
        ));

    public_routes
        .merge(gated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Admin JSON API: share lifecycle and the conditional file write.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/share/create", post(handlers::share::create_share))
        .route("/api/share/toggle", post(handlers::share::toggle_share))
        .route("/api/share/delete", post(handlers::share::delete_share))
        .route("/api/file/update", post(handlers::file::update_file))
}

/// Server-rendered pages plus the raw file proxy.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::browse::list_repositories))
        .route("/admin/shares", get(handlers::share::share_manager))
        .route("/{*path}", get(handlers::browse::browse_path))
}
