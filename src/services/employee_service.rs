//! Employee service - Handles employee-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, EmployeeChanges, NewEmployee, Task};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List all employees, each with its assigned tasks
    async fn list_employees(&self) -> AppResult<Vec<(Employee, Vec<Task>)>>;

    /// Get one employee with its assigned tasks
    async fn get_employee(&self, id: i32) -> AppResult<(Employee, Vec<Task>)>;

    /// Create an employee
    async fn create_employee(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Update supplied employee fields
    async fn update_employee(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee>;

    /// Delete an employee that has no assigned tasks
    async fn delete_employee(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn require_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Employee name is required"));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self) -> AppResult<Vec<(Employee, Vec<Task>)>> {
        self.uow.employees().list_with_tasks().await
    }

    async fn get_employee(&self, id: i32) -> AppResult<(Employee, Vec<Task>)> {
        self.uow
            .employees()
            .find_with_tasks(id)
            .await?
            .ok_or_not_found("Employee")
    }

    async fn create_employee(&self, employee: NewEmployee) -> AppResult<Employee> {
        require_name(&employee.name)?;

        let created = self.uow.employees().create(employee).await?;
        tracing::info!(employee_id = created.id, "Employee created");
        Ok(created)
    }

    async fn update_employee(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee> {
        if let Some(name) = &changes.name {
            require_name(name)?;
        }

        self.uow.employees().update(id, changes).await
    }

    async fn delete_employee(&self, id: i32) -> AppResult<()> {
        self.uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Employee")?;

        let assigned = self.uow.tasks().count_for_employee(id).await?;
        if assigned > 0 {
            return Err(AppError::conflict(format!(
                "Employee {} still has {} assigned task(s)",
                id, assigned
            )));
        }

        self.uow.employees().delete(id).await?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}
