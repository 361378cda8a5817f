//! Record value constants.
//!
//! Presentation values are lowercase snake_case; storage statuses are
//! capitalized phrases.

// =============================================================================
// Task Status
// =============================================================================

/// Presentation status for tasks not yet started
pub const STATUS_PENDING: &str = "pending";

/// Presentation status for tasks being worked on
pub const STATUS_IN_PROGRESS: &str = "in_progress";

/// Presentation status for finished tasks
pub const STATUS_COMPLETED: &str = "completed";

/// Statuses the dashboard always reports, in display order
pub const KNOWN_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

/// Storage form of [`STATUS_PENDING`], also the store's column default
pub const STORAGE_STATUS_PENDING: &str = "Pending";

/// Storage form of [`STATUS_IN_PROGRESS`]
pub const STORAGE_STATUS_IN_PROGRESS: &str = "In Progress";

/// Storage form of [`STATUS_COMPLETED`]
pub const STORAGE_STATUS_COMPLETED: &str = "Completed";

// =============================================================================
// Task Priority
// =============================================================================

pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

/// All valid priority values, highest first
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_HIGH, PRIORITY_MEDIUM, PRIORITY_LOW];

/// Check if a presentation priority value is valid
pub fn is_valid_priority(priority: &str) -> bool {
    VALID_PRIORITIES.contains(&priority)
}

// =============================================================================
// Departments
// =============================================================================

/// Department assumed when an imported employee has none
pub const DEFAULT_DEPARTMENT: &str = "Engineering";

/// Departments offered by default. The set is open; other values are kept.
pub const KNOWN_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Design",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
];

// =============================================================================
// Filter Sentinels
// =============================================================================

/// Task status/priority filter value meaning "no constraint"
pub const FILTER_ALL: &str = "all";

/// Employee department filter value meaning "no constraint"
pub const DEPARTMENT_ALL: &str = "All";
