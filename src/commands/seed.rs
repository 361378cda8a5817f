//! Seed command - Imports a nested employees document.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ImportReport, ServiceContainer, Services};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Arc::new(Database::connect(&config).await?);
    let document = read_document(&args.file)?;
    let imports = Services::from_connection(db.get_connection()).imports();

    let report = if args.force {
        Some(imports.import_document(document).await?)
    } else {
        imports.seed_if_empty(document).await?
    };

    match report {
        Some(ImportReport { employees, tasks }) => {
            println!("Imported {} employees and {} tasks", employees, tasks)
        }
        None => println!("Employees already present; rerun with --force to import anyway"),
    }

    Ok(())
}

/// Seed an empty database from `path`; used by `serve` on startup.
pub async fn seed_from_file(database: &Database, path: &Path) -> AppResult<Option<ImportReport>> {
    tracing::info!(path = %path.display(), "Checking seed file");
    let document = read_document(path)?;

    Services::from_connection(database.get_connection())
        .imports()
        .seed_if_empty(document)
        .await
}

/// Read and parse a JSON document.
pub fn read_document(path: &Path) -> AppResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AppError::BadRequest(format!("cannot read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&text).map_err(|e| {
        AppError::BadRequest(format!("{} is not valid JSON: {}", path.display(), e))
    })
}
