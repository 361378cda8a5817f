//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the employees and tasks tables
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{EmployeeRepository, EmployeeStore, TaskRepository, TaskStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxEmployeeRepository, TxTaskRepository, UnitOfWork,
};

#[cfg(test)]
pub use repositories::{MockEmployeeRepository, MockTaskRepository};
