//! Task handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::TASK_DELETED_MESSAGE;
use crate::domain::{NewTask, TaskChanges, TaskQuery, TaskResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse};

/// List filters, matched exactly against stored values
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListParams {
    /// Storage status, e.g. `In Progress`
    pub status: Option<String>,
    /// Assigned employee ID
    #[serde(rename = "employeeId")]
    #[param(value_type = Option<i32>)]
    pub employee_id: Option<String>,
}

/// Create task request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Fix bug")]
    pub title: String,
    /// Defaults to `Pending`
    #[schema(example = "In Progress")]
    pub status: Option<String>,
    /// Defaults to `medium`
    #[schema(example = "high")]
    pub priority: Option<String>,
    #[schema(example = "2024-05-01")]
    pub due_date: Option<String>,
    #[serde(rename = "employeeId")]
    #[schema(example = 1)]
    pub employee_id: Option<i32>,
}

/// Update task request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<i32>,
}

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", put(update_task).delete(delete_task))
}

/// Drop empty strings so they fall back to defaults.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_due_date(value: Option<String>) -> AppResult<Option<NaiveDate>> {
    supplied(value)
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::validation(format!("Invalid due_date: {}", raw)))
        })
        .transpose()
}

fn parse_employee_filter(value: Option<String>) -> AppResult<Option<i32>> {
    supplied(value)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| AppError::BadRequest(format!("employeeId must be a number: {}", raw)))
        })
        .transpose()
}

/// List tasks with their assigned employees
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    params(TaskListParams),
    responses(
        (status = 200, description = "List of tasks", body = Vec<TaskResponse>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<TaskResponse>>> {
    let query = TaskQuery {
        status: supplied(params.status),
        employee_id: parse_employee_filter(params.employee_id)?,
    };

    let tasks = state.task_service.list_tasks(query).await?;

    Ok(Json(
        tasks
            .into_iter()
            .map(|(task, employee)| TaskResponse::with_employee(task, employee))
            .collect(),
    ))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Validation error or unknown employee")
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> AppResult<Created<TaskResponse>> {
    let employee_id = payload
        .employee_id
        .ok_or_else(|| AppError::validation("employeeId is required"))?;

    let task = state
        .task_service
        .create_task(NewTask {
            title: payload.title,
            status: supplied(payload.status),
            priority: supplied(payload.priority),
            due_date: parse_due_date(payload.due_date)?,
            employee_id,
        })
        .await?;

    Ok(Created(TaskResponse::from(task)))
}

/// Update task fields
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTaskRequest>,
) -> AppResult<Json<TaskResponse>> {
    let task = state
        .task_service
        .update_task(
            id,
            TaskChanges {
                title: payload.title,
                status: supplied(payload.status),
                priority: supplied(payload.priority),
                due_date: parse_due_date(payload.due_date)?,
                employee_id: payload.employee_id,
            },
        )
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.task_service.delete_task(id).await?;
    Ok(Json(MessageResponse::new(TASK_DELETED_MESSAGE)))
}
