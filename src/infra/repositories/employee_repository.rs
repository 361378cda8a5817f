//! Employee repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use super::entities::task::{self, Entity as TaskEntity};
use crate::domain::{Employee, EmployeeChanges, NewEmployee, Task};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Find employee by ID together with its tasks
    async fn find_with_tasks(&self, id: i32) -> AppResult<Option<(Employee, Vec<Task>)>>;

    /// List all employees with their tasks, ordered by ID
    async fn list_with_tasks(&self) -> AppResult<Vec<(Employee, Vec<Task>)>>;

    /// Count all employees
    async fn count(&self) -> AppResult<u64>;

    /// Create a new employee
    async fn create(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Update supplied employee fields
    async fn update(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee>;

    /// Delete employee by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Insert an employee on any connection or transaction.
pub(crate) async fn insert_employee<C>(db: &C, employee: NewEmployee) -> AppResult<Employee>
where
    C: ConnectionTrait,
{
    let now = Utc::now();
    let active_model = ActiveModel {
        name: Set(employee.name),
        role: Set(employee.role),
        department: Set(employee.department),
        email: Set(employee.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = active_model.insert(db).await.map_err(AppError::from)?;
    Ok(Employee::from(model))
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_with_tasks(&self, id: i32) -> AppResult<Option<(Employee, Vec<Task>)>> {
        let result = EmployeeEntity::find_by_id(id)
            .find_with_related(TaskEntity)
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.into_iter().next().map(|(model, tasks)| {
            (
                Employee::from(model),
                tasks.into_iter().map(Task::from).collect(),
            )
        }))
    }

    async fn list_with_tasks(&self) -> AppResult<Vec<(Employee, Vec<Task>)>> {
        let rows = EmployeeEntity::find()
            .find_with_related(TaskEntity)
            .order_by_asc(employee::Column::Id)
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(model, tasks)| {
                (
                    Employee::from(model),
                    tasks.into_iter().map(Task::from).collect(),
                )
            })
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        EmployeeEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, employee: NewEmployee) -> AppResult<Employee> {
        insert_employee(&self.db, employee).await
    }

    async fn update(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Employee")?;

        let mut active: ActiveModel = employee.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(role) = changes.role {
            active.role = Set(Some(role));
        }
        if let Some(department) = changes.department {
            active.department = Set(Some(department));
        }
        if let Some(email) = changes.email {
            active.email = Set(Some(email));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Employee"));
        }

        Ok(())
    }
}
