// src/session.rs

//! Session state: jobs, dependency edges and progress notes.
//!
//! A [`Session`] is created once (usually by loading a session file) and then
//! passed by reference into the graph, conflict and filter operations. Those
//! operations never keep state of their own.

use std::collections::BTreeMap;

use tracing::debug;

use crate::dag::{ConflictReport, DependencyGraph, check_conflicts};
use crate::errors::{JobboardError, Result};
use crate::job::{DependencyEdge, Job};
use crate::query::{JobFilter, filter_jobs};
use crate::store::JobStore;
use crate::types::{JobStatus, WorkOrder};

#[derive(Debug, Clone, Default)]
pub struct Session {
    jobs: JobStore,
    dependencies: Vec<DependencyEdge>,
    progress_log: BTreeMap<WorkOrder, Vec<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_job(&mut self, job: Job) -> Result<()> {
        self.jobs.insert(job)
    }

    /// Append a dependency edge. Duplicates and unknown work orders are
    /// accepted; they surface later in the graph and the conflict report.
    pub fn add_dependency(&mut self, predecessor: impl Into<WorkOrder>, successor: impl Into<WorkOrder>) {
        let edge = DependencyEdge::new(predecessor, successor);
        debug!(%edge, "session: adding dependency");
        self.dependencies.push(edge);
    }

    pub fn set_status(&mut self, work_order: &str, status: JobStatus) -> Result<()> {
        self.jobs.set_status(work_order, status)
    }

    /// Append a progress note for a known job.
    pub fn record_progress(&mut self, work_order: &str, entry: impl Into<String>) -> Result<()> {
        if !self.jobs.contains(work_order) {
            return Err(JobboardError::JobNotFound(work_order.to_string()));
        }
        self.progress_log
            .entry(work_order.to_string())
            .or_default()
            .push(entry.into());
        Ok(())
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    pub fn job(&self, work_order: &str) -> Option<&Job> {
        self.jobs.get(work_order)
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    pub fn progress_of(&self, work_order: &str) -> &[String] {
        self.progress_log
            .get(work_order)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::from_edges(&self.dependencies)
    }

    pub fn check_conflicts(&self) -> ConflictReport {
        check_conflicts(&self.jobs, &self.dependencies)
    }

    /// The unfiltered view for this session's jobs.
    pub fn default_filter(&self) -> JobFilter {
        JobFilter::all_of(&self.jobs)
    }

    pub fn filter_jobs(&self, filter: &JobFilter) -> Vec<&Job> {
        filter_jobs(&self.jobs, filter)
    }
}
