//! GitShelf Server — GitHub-backed file browser with public share links.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gitshelf_core::config::AppConfig;
use gitshelf_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting GitShelf v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Validate required external bindings ──────────────
    config.validate()?;

    // ── Step 2: Initialize share store ───────────────────────────
    tracing::info!("Initializing share store (provider: {})...", config.store.provider);
    let store = Arc::new(gitshelf_store::StoreManager::new(&config.store).await?);
    let shares = gitshelf_store::ShareStore::new(Arc::clone(&store));
    tracing::info!("Share store initialized");

    // ── Step 3: Initialize upstream content source ───────────────
    tracing::info!(owner = %config.upstream.owner, "Initializing upstream client...");
    let client = gitshelf_github::GithubClient::new(&config.upstream)?;
    let source: Arc<dyn gitshelf_core::traits::source::ContentSource> =
        Arc::new(gitshelf_github::GithubContentSource::new(client));

    // ── Step 4: Initialize services ──────────────────────────────
    let ids = gitshelf_service::share::id::IdGenerator::new(config.share.id_length);
    let browse_service = Arc::new(gitshelf_service::BrowseService::new(Arc::clone(&source)));
    let editor_service = Arc::new(gitshelf_service::EditorService::new(Arc::clone(&source)));
    let share_service = Arc::new(gitshelf_service::ShareService::new(shares.clone(), ids));
    let access_service = Arc::new(gitshelf_service::AccessService::new(
        shares.clone(),
        Arc::clone(&source),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = gitshelf_api::AppState {
        config: Arc::new(config.clone()),
        browse_service,
        editor_service,
        share_service,
        access_service,
    };

    let app = gitshelf_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("GitShelf server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("GitShelf server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
