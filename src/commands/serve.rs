//! Serve command - Starts the HTTP server.

use std::path::Path;
use std::sync::Arc;

use axum::Router;

use super::seed::seed_from_file;
use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database; pending migrations run here
    let db = Arc::new(Database::connect(&config).await?);

    let app = build_app(db, &config).await;

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Seed from the configured file, then build the router.
///
/// Seeding problems are logged; the server starts regardless.
pub async fn build_app(db: Arc<Database>, config: &Config) -> Router {
    if let Some(path) = &config.seed_file {
        seed_on_startup(&db, path).await;
    }

    let app_state = AppState::from_config(db, config);
    if let Some(dir) = &app_state.static_dir {
        tracing::info!(dir = %dir.display(), "Serving static frontend");
    }

    create_router(app_state)
}

async fn seed_on_startup(db: &Database, path: &Path) {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Seed file not found, skipping seed");
        return;
    }

    if let Err(e) = seed_from_file(db, path).await {
        tracing::error!(path = %path.display(), error = %e, "Seeding failed, continuing without sample data");
    }
}
