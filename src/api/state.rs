//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{EmployeeService, ServiceContainer, Services, TaskService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Task service
    pub task_service: Arc<dyn TaskService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
    /// Built frontend served for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create application state from a database and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            employee_service: container.employees(),
            task_service: container.tasks(),
            database,
            static_dir: config.static_dir.clone(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        task_service: Arc<dyn TaskService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            employee_service,
            task_service,
            database,
            static_dir: None,
        }
    }
}
