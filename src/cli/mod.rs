//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed` - Bulk import of a nested employees document
//! - `report` - Dashboard report from a running gateway

pub mod args;

pub use args::{Cli, Commands};
