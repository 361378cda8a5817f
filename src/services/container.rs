//! Service Container - Centralized service access.
//!
//! Handlers depend on the `ServiceContainer` trait, so the router can be
//! built over any set of service implementations.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    EmployeeManager, EmployeeService, ImportService, Importer, TaskManager, TaskService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get task service
    fn tasks(&self) -> Arc<dyn TaskService>;

    /// Get import service
    fn imports(&self) -> Arc<dyn ImportService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    employee_service: Arc<dyn EmployeeService>,
    task_service: Arc<dyn TaskService>,
    import_service: Arc<dyn ImportService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        task_service: Arc<dyn TaskService>,
        import_service: Arc<dyn ImportService>,
    ) -> Self {
        Self {
            employee_service,
            task_service,
            import_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            task_service: Arc::new(TaskManager::new(uow.clone())),
            import_service: Arc::new(Importer::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskService> {
        self.task_service.clone()
    }

    fn imports(&self) -> Arc<dyn ImportService> {
        self.import_service.clone()
    }
}
