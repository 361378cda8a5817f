//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default base URL the report command talks to
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

/// File served for any unmatched GET when a static directory is configured
pub const SPA_INDEX_FILE: &str = "index.html";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://taskflow.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Messages
// =============================================================================

/// Body message returned by `DELETE /tasks/:id`
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully";

/// Body message returned by `DELETE /employees/:id`
pub const EMPLOYEE_DELETED_MESSAGE: &str = "Employee deleted successfully";
