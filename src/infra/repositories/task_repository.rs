//! Task repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::employee::Entity as EmployeeEntity;
use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use crate::domain::{Employee, NewTask, Task, TaskChanges, TaskQuery};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Task repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Task>>;

    /// List tasks matching the query, each with its assigned employee
    async fn list(&self, query: TaskQuery) -> AppResult<Vec<(Task, Option<Employee>)>>;

    /// Count tasks assigned to an employee
    async fn count_for_employee(&self, employee_id: i32) -> AppResult<u64>;

    /// Create a new task
    async fn create(&self, task: NewTask) -> AppResult<Task>;

    /// Update supplied task fields
    async fn update(&self, id: i32, changes: TaskChanges) -> AppResult<Task>;

    /// Delete task by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of TaskRepository
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Insert a task on any connection or transaction.
///
/// Missing status and priority take the column defaults.
pub(crate) async fn insert_task<C>(db: &C, task: NewTask) -> AppResult<Task>
where
    C: ConnectionTrait,
{
    let now = Utc::now();
    let mut active_model = ActiveModel {
        title: Set(task.title),
        due_date: Set(task.due_date),
        employee_id: Set(task.employee_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    if let Some(status) = task.status {
        active_model.status = Set(status);
    }
    if let Some(priority) = task.priority {
        active_model.priority = Set(priority);
    }

    let model = active_model.insert(db).await.map_err(AppError::from)?;
    Ok(Task::from(model))
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Task>> {
        let result = TaskEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Task::from))
    }

    async fn list(&self, query: TaskQuery) -> AppResult<Vec<(Task, Option<Employee>)>> {
        let mut select = TaskEntity::find();
        if let Some(status) = query.status {
            select = select.filter(task::Column::Status.eq(status));
        }
        if let Some(employee_id) = query.employee_id {
            select = select.filter(task::Column::EmployeeId.eq(employee_id));
        }

        let rows = select
            .find_also_related(EmployeeEntity)
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(task, employee)| (Task::from(task), employee.map(Employee::from)))
            .collect())
    }

    async fn count_for_employee(&self, employee_id: i32) -> AppResult<u64> {
        TaskEntity::find()
            .filter(task::Column::EmployeeId.eq(employee_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, task: NewTask) -> AppResult<Task> {
        insert_task(&self.db, task).await
    }

    async fn update(&self, id: i32, changes: TaskChanges) -> AppResult<Task> {
        let task = TaskEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Task")?;

        let mut active: ActiveModel = task.into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(priority) = changes.priority {
            active.priority = Set(priority);
        }
        if let Some(due_date) = changes.due_date {
            active.due_date = Set(Some(due_date));
        }
        if let Some(employee_id) = changes.employee_id {
            active.employee_id = Set(employee_id);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Task::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = TaskEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Task"));
        }

        Ok(())
    }
}
