//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{employee_handler, task_handler};
use crate::domain::{EmployeeResponse, TaskResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the TaskFlow gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskFlow",
        version = "0.1.0",
        description = "Employee and task persistence gateway",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Employee endpoints
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        // Task endpoints
        task_handler::list_tasks,
        task_handler::create_task,
        task_handler::update_task,
        task_handler::delete_task,
    ),
    components(
        schemas(
            EmployeeResponse,
            TaskResponse,
            MessageResponse,
            employee_handler::CreateEmployeeRequest,
            employee_handler::UpdateEmployeeRequest,
            task_handler::CreateTaskRequest,
            task_handler::UpdateTaskRequest,
        )
    ),
    tags(
        (name = "Employees", description = "Employee records with their tasks"),
        (name = "Tasks", description = "Task records with their assignees")
    )
)]
pub struct ApiDoc;
