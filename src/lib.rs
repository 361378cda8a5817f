//! TaskFlow - Employee and task tracking gateway
//!
//! A REST gateway over a relational store plus a typed client for it.
//! Record mapping, metrics and filtering live in the `taskflow-core` crate;
//! this crate adds persistence, HTTP and the command line.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Stored employee and task entities
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **client**: Gateway client producing presentation records
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Import sample data
//! cargo run -- seed --file data/employees.json
//!
//! # Print a dashboard report
//! cargo run -- report --status pending
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use client::{ClientError, GatewayClient, Snapshot};
pub use config::Config;
pub use errors::{AppError, AppResult};
