// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_session_path;
use crate::types::JobStatus;

/// Command-line arguments for `jobboard`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jobboard",
    version,
    about = "Track manufacturing job orders, their dependencies and scheduling conflicts.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the session file (TOML).
    ///
    /// Default: `Jobs.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_session_path(), global = true)]
    pub session: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JOBBOARD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse and validate the session file, then print a summary.
    Validate,

    /// Check every dependency for start-before-due conflicts.
    Check {
        /// Exit with status 2 when at least one conflict is found.
        #[arg(long)]
        fail_on_conflict: bool,
    },

    /// Print the dependency list, or the graph in Graphviz DOT format.
    Graph {
        #[arg(long)]
        dot: bool,
    },

    /// List jobs, optionally filtered. Omitted filters include every value.
    List {
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<JobStatus>,

        #[arg(long = "operator", value_name = "NAME")]
        operators: Vec<String>,

        #[arg(long = "machine", value_name = "NAME")]
        machines: Vec<String>,
    },

    /// Print every field of one job, followed by its progress log.
    Show { work_order: String },

    /// Write the job traveler for one work order.
    Traveler {
        work_order: String,

        /// Output directory.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
