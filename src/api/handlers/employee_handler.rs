//! Employee handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::EMPLOYEE_DELETED_MESSAGE;
use crate::domain::{EmployeeChanges, EmployeeResponse, NewEmployee};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ann Lee")]
    pub name: String,
    #[schema(example = "Engineer")]
    pub role: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "ann.lee@example.com")]
    pub email: Option<String>,
}

/// Update employee request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees with their tasks
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;

    Ok(Json(
        employees
            .into_iter()
            .map(|(employee, tasks)| EmployeeResponse::with_tasks(employee, tasks))
            .collect(),
    ))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee with tasks", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let (employee, tasks) = state.employee_service.get_employee(id).await?;
    Ok(Json(EmployeeResponse::with_tasks(employee, tasks)))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<Created<EmployeeResponse>> {
    let employee = state
        .employee_service
        .create_employee(NewEmployee {
            name: payload.name,
            role: payload.role,
            department: payload.department,
            email: payload.email,
        })
        .await?;

    Ok(Created(EmployeeResponse::from(employee)))
}

/// Update employee details
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(
            id,
            EmployeeChanges {
                name: payload.name,
                role: payload.role,
                department: payload.department,
                email: payload.email,
            },
        )
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete an employee without assigned tasks
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Employee still has assigned tasks")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.employee_service.delete_employee(id).await?;
    Ok(Json(MessageResponse::new(EMPLOYEE_DELETED_MESSAGE)))
}
