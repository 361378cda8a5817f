//! Import service - Loads nested employee documents into the store.
//!
//! Documents go through the bulk-import normalizer first, so malformed
//! records get defaults instead of failing the import. All rows of one
//! document are written in a single transaction.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use taskflow_core::{denormalize_employee, denormalize_status, normalize_nested, EmployeeDraft};

use crate::domain::{NewEmployee, NewTask};
use crate::errors::AppResult;
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

/// Rows written by one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub employees: usize,
    pub tasks: usize,
}

/// Import service trait for dependency injection.
#[async_trait]
pub trait ImportService: Send + Sync {
    /// Import every employee and task of a nested document
    async fn import_document(&self, document: Value) -> AppResult<ImportReport>;

    /// Import the document only when the store holds no employees yet
    async fn seed_if_empty(&self, document: Value) -> AppResult<Option<ImportReport>>;
}

/// Concrete implementation of ImportService using Unit of Work.
pub struct Importer<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Importer<U> {
    /// Create new import service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Storage-ready rows derived from a nested document.
struct ImportPlan {
    /// Import-local employee id and its row
    employees: Vec<(String, NewEmployee)>,
    /// Import-local assignee id and a task row without its employee key
    tasks: Vec<(String, NewTask)>,
}

impl ImportPlan {
    fn from_document(document: &Value) -> Self {
        let nested = normalize_nested(document);

        let employees = nested
            .employees
            .iter()
            .filter(|employee| {
                let named = !employee.name.trim().is_empty();
                if !named {
                    tracing::warn!(id = %employee.id, "Skipping employee without a name");
                }
                named
            })
            .map(|employee| {
                let payload = denormalize_employee(&EmployeeDraft {
                    name: employee.name.clone(),
                    position: employee.position.clone(),
                    department: employee.department.clone(),
                    email: employee.email.clone(),
                    phone: employee.phone.clone(),
                });
                let row = NewEmployee {
                    name: payload.name,
                    role: non_empty(payload.role),
                    department: non_empty(payload.department),
                    email: non_empty(payload.email),
                };
                (employee.id.clone(), row)
            })
            .collect();

        let tasks = nested
            .tasks
            .iter()
            .filter(|task| {
                let titled = !task.title.trim().is_empty();
                if !titled {
                    tracing::warn!(id = %task.id, "Skipping task without a title");
                }
                titled
            })
            .map(|task| {
                let row = NewTask {
                    title: task.title.clone(),
                    status: Some(denormalize_status(&task.status)),
                    priority: Some(task.priority.clone()),
                    due_date: task.due_date.as_deref().and_then(parse_due_date),
                    employee_id: 0,
                };
                (task.assigned_to.clone(), row)
            })
            .collect();

        Self { employees, tasks }
    }

    async fn apply(self, ctx: &TransactionContext<'_>) -> AppResult<ImportReport> {
        let mut report = ImportReport::default();
        // A repeated import id maps to the last employee carrying it.
        let mut ids: HashMap<String, i32> = HashMap::with_capacity(self.employees.len());

        for (import_id, row) in self.employees {
            let created = ctx.employees().create(row).await?;
            ids.insert(import_id, created.id);
            report.employees += 1;
        }

        for (assignee, row) in self.tasks {
            let Some(&employee_id) = ids.get(&assignee) else {
                tracing::warn!(assignee = %assignee, "Skipping task with unknown assignee");
                continue;
            };
            ctx.tasks().create(NewTask { employee_id, ..row }).await?;
            report.tasks += 1;
        }

        Ok(report)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse the date part of an ISO-8601 date or datetime string.
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[async_trait]
impl<U: UnitOfWork> ImportService for Importer<U> {
    async fn import_document(&self, document: Value) -> AppResult<ImportReport> {
        let plan = ImportPlan::from_document(&document);

        let report = with_transaction!(self.uow, |ctx| plan.apply(&ctx).await)?;
        tracing::info!(
            employees = report.employees,
            tasks = report.tasks,
            "Import completed"
        );
        Ok(report)
    }

    async fn seed_if_empty(&self, document: Value) -> AppResult<Option<ImportReport>> {
        let plan = ImportPlan::from_document(&document);

        let report = with_transaction!(self.uow, |ctx| {
            if ctx.employees().count().await? > 0 {
                return Ok(None);
            }
            plan.apply(&ctx).await.map(Some)
        })?;

        match report {
            Some(report) => tracing::info!(
                employees = report.employees,
                tasks = report.tasks,
                "Seeded empty database"
            ),
            None => tracing::info!("Employees already present, skipping seed"),
        }
        Ok(report)
    }
}
