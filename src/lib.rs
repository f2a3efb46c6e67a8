// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod job;
pub mod logging;
pub mod query;
pub mod session;
pub mod store;
pub mod traveler;
pub mod types;

use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::dag::ConflictReport;
use crate::query::JobFilter;
use crate::session::Session;

pub use crate::dag::{Conflict, DependencyGraph, check_conflicts};
pub use crate::errors::JobboardError;
pub use crate::job::{DependencyEdge, Job};
pub use crate::store::JobStore;
pub use crate::types::JobStatus;

/// How a command finished, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    ConflictsFound,
}

/// High-level entry point used by `main.rs`.
///
/// Loads the session file named on the command line and dispatches to the
/// requested subcommand. Reports go to stdout.
pub fn run(args: CliArgs) -> Result<RunStatus> {
    let session = load_and_validate(&args.session)?;
    let mut out = io::stdout().lock();
    execute(&session, args.command, &mut out)
}

/// Run one subcommand against an already loaded session.
pub fn execute(session: &Session, command: Command, out: &mut impl Write) -> Result<RunStatus> {
    match command {
        Command::Validate => {
            print_summary(session, out)?;
        }
        Command::Check { fail_on_conflict } => {
            let report = session.check_conflicts();
            print_conflict_report(&report, out)?;
            if fail_on_conflict && !report.is_clean() {
                return Ok(RunStatus::ConflictsFound);
            }
        }
        Command::Graph { dot } => {
            if dot {
                writeln!(out, "{}", session.dependency_graph().to_dot())?;
            } else {
                print_dependencies(session, out)?;
            }
        }
        Command::List {
            statuses,
            operators,
            machines,
        } => {
            let filter = list_filter(session, statuses, operators, machines);
            print_jobs(session, &filter, out)?;
        }
        Command::Show { work_order } => {
            let Some(job) = session.job(&work_order) else {
                bail!(JobboardError::JobNotFound(work_order));
            };
            print_job_details(job, session.progress_of(&work_order), out)?;
        }
        Command::Traveler { work_order, out: dir } => {
            let Some(job) = session.job(&work_order) else {
                bail!(JobboardError::JobNotFound(work_order));
            };
            let path = traveler::write_traveler(&dir, job, session.progress_of(&work_order))?;
            writeln!(out, "{}", path.display())?;
        }
    }

    Ok(RunStatus::Ok)
}

/// Session default filter, narrowed on each dimension given on the CLI.
pub fn list_filter(
    session: &Session,
    statuses: Vec<JobStatus>,
    operators: Vec<String>,
    machines: Vec<String>,
) -> JobFilter {
    let mut filter = session.default_filter();
    if !statuses.is_empty() {
        filter = filter.with_statuses(statuses);
    }
    if !operators.is_empty() {
        filter = filter.with_operators(operators);
    }
    if !machines.is_empty() {
        filter = filter.with_machines(machines);
    }
    filter
}

/// Job / dependency counts plus graph diagnostics.
pub fn print_summary(session: &Session, out: &mut impl Write) -> io::Result<()> {
    let graph = session.dependency_graph();
    writeln!(out, "jobboard session")?;
    writeln!(out, "  jobs = {}", session.jobs().len())?;
    writeln!(out, "  dependencies = {}", session.dependencies().len())?;
    writeln!(out, "  graph.nodes = {}", graph.node_count())?;
    writeln!(out, "  graph.edges = {}", graph.edge_count())?;
    if graph.is_cyclic() {
        writeln!(out, "  graph contains a dependency cycle")?;
    }
    debug!("summary complete");
    Ok(())
}

/// One `⚠` line per conflict, or a single success line.
pub fn print_conflict_report(report: &ConflictReport, out: &mut impl Write) -> io::Result<()> {
    if report.is_clean() {
        writeln!(out, "✅ No dependency conflicts found.")?;
    } else {
        for conflict in &report.conflicts {
            writeln!(out, "⚠ {conflict}")?;
        }
    }
    for unresolved in &report.unresolved {
        writeln!(out, "? {unresolved}")?;
    }
    Ok(())
}

pub fn print_dependencies(session: &Session, out: &mut impl Write) -> io::Result<()> {
    if session.dependencies().is_empty() {
        return writeln!(out, "No dependencies defined.");
    }
    writeln!(out, "Current Dependencies")?;
    for edge in session.dependencies() {
        writeln!(out, "- ✅ {edge}")?;
    }
    Ok(())
}

pub fn print_jobs(session: &Session, filter: &JobFilter, out: &mut impl Write) -> io::Result<()> {
    for job in session.filter_jobs(filter) {
        writeln!(out, "{}", job.label())?;
    }
    Ok(())
}

/// Job summary: `key: value` per field, then the progress log.
pub fn print_job_details(job: &Job, progress: &[String], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Job Summary: {}", job.label())?;
    for (key, value) in job.fields() {
        writeln!(out, "  {key}: {value}")?;
    }
    if progress.is_empty() {
        writeln!(out, "  progress_log: (none)")?;
    } else {
        writeln!(out, "  progress_log:")?;
        for entry in progress {
            writeln!(out, "    - {entry}")?;
        }
    }
    Ok(())
}
