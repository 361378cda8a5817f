//! HTTP request handlers.

pub mod employee_handler;
pub mod task_handler;

pub use employee_handler::employee_routes;
pub use task_handler::task_routes;
