//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-row writes, such as a
//! seed import, inside a single database transaction.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::EmployeeEntity;
use super::repositories::{
    insert_employee, insert_task, EmployeeRepository, EmployeeStore, TaskRepository, TaskStore,
};
use crate::domain::{Employee, NewEmployee, NewTask, Task};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic transaction method;
/// services are tested with a hand-written implementation over mocked
/// repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Get task repository
    fn tasks(&self) -> Arc<dyn TaskRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get employee repository for this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository { txn: self.txn }
    }

    /// Get task repository for this transaction
    pub fn tasks(&self) -> TxTaskRepository<'_> {
        TxTaskRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    employee_repo: Arc<EmployeeStore>,
    task_repo: Arc<TaskStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(EmployeeStore::new(db.clone()));
        let task_repo = Arc::new(TaskStore::new(db.clone()));
        Self {
            db,
            employee_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.task_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware employee repository.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    /// Count all employees visible to this transaction
    pub async fn count(&self) -> AppResult<u64> {
        EmployeeEntity::find()
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Create a new employee
    pub async fn create(&self, employee: NewEmployee) -> AppResult<Employee> {
        insert_employee(self.txn, employee).await
    }
}

/// Transaction-aware task repository.
pub struct TxTaskRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxTaskRepository<'a> {
    /// Create a new task
    pub async fn create(&self, task: NewTask) -> AppResult<Task> {
        insert_task(self.txn, task).await
    }
}

/// Run a block inside `UnitOfWork::transaction`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
