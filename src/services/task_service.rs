//! Task service - Handles task-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use taskflow_core::{PRIORITY_MEDIUM, STORAGE_STATUS_PENDING};

use crate::domain::{Employee, NewTask, Task, TaskChanges, TaskQuery};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Task service trait for dependency injection.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// List tasks matching the query, each with its assigned employee
    async fn list_tasks(&self, query: TaskQuery) -> AppResult<Vec<(Task, Option<Employee>)>>;

    /// Create a task for an existing employee
    async fn create_task(&self, task: NewTask) -> AppResult<Task>;

    /// Update supplied task fields
    async fn update_task(&self, id: i32, changes: TaskChanges) -> AppResult<Task>;

    /// Delete a task
    async fn delete_task(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of TaskService using Unit of Work.
pub struct TaskManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TaskManager<U> {
    /// Create new task service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_employee(&self, employee_id: i32) -> AppResult<()> {
        if self.uow.employees().find_by_id(employee_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Employee {} does not exist",
                employee_id
            )));
        }
        Ok(())
    }
}

fn require_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Task title is required"));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> TaskService for TaskManager<U> {
    async fn list_tasks(&self, query: TaskQuery) -> AppResult<Vec<(Task, Option<Employee>)>> {
        self.uow.tasks().list(query).await
    }

    async fn create_task(&self, task: NewTask) -> AppResult<Task> {
        require_title(&task.title)?;
        self.require_employee(task.employee_id).await?;

        let task = NewTask {
            status: task
                .status
                .or_else(|| Some(STORAGE_STATUS_PENDING.to_string())),
            priority: task.priority.or_else(|| Some(PRIORITY_MEDIUM.to_string())),
            ..task
        };

        let created = self.uow.tasks().create(task).await?;
        tracing::info!(task_id = created.id, employee_id = created.employee_id, "Task created");
        Ok(created)
    }

    async fn update_task(&self, id: i32, changes: TaskChanges) -> AppResult<Task> {
        if let Some(title) = &changes.title {
            require_title(title)?;
        }
        if let Some(employee_id) = changes.employee_id {
            self.require_employee(employee_id).await?;
        }

        self.uow.tasks().update(id, changes).await
    }

    async fn delete_task(&self, id: i32) -> AppResult<()> {
        self.uow.tasks().delete(id).await?;
        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }
}
