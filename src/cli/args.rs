//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_GATEWAY_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// TaskFlow - Employee and task tracking gateway
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Import a nested employees document
    Seed(SeedArgs),

    /// Print a dashboard report fetched from a running gateway
    Report(ReportArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Nested `{"employees": [...]}` JSON document
    #[arg(short, long, env = "SEED_FILE")]
    pub file: PathBuf,

    /// Import even when employees already exist
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Gateway base URL
    #[arg(long, default_value = DEFAULT_GATEWAY_URL, env = "GATEWAY_URL")]
    pub url: String,

    /// Case-insensitive text matched against titles and names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Task status (`pending`, `in_progress`, `completed` or `all`)
    #[arg(long, default_value = taskflow_core::FILTER_ALL)]
    pub status: String,

    /// Task priority (`high`, `medium`, `low` or `all`)
    #[arg(long, default_value = taskflow_core::FILTER_ALL)]
    pub priority: String,

    /// Employee department, or `All`
    #[arg(long, default_value = taskflow_core::DEPARTMENT_ALL)]
    pub department: String,

    /// Only list tasks assigned to this employee ID
    #[arg(short, long)]
    pub employee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let cli = Cli::try_parse_from(["taskflow", "report"]).unwrap();
        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.status, "all");
        assert_eq!(args.priority, "all");
        assert_eq!(args.department, "All");
        assert!(args.employee.is_none());
    }

    #[test]
    fn test_seed_force_flag() {
        let cli =
            Cli::try_parse_from(["taskflow", "seed", "--file", "data.json", "--force"]).unwrap();
        let Commands::Seed(args) = cli.command else {
            panic!("expected seed command");
        };
        assert!(args.force);
        assert_eq!(args.file, PathBuf::from("data.json"));
    }

    #[test]
    fn test_migrate_status() {
        let cli = Cli::try_parse_from(["taskflow", "-v", "migrate", "status"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
