// src/store.rs

//! In-memory job store keyed by work order.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{JobboardError, Result};
use crate::job::Job;
use crate::types::JobStatus;

/// Insertion-ordered collection of jobs with a work-order index.
///
/// Jobs are never removed; iteration order is the order in which they were
/// added, which every read-only view preserves.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
    index: HashMap<String, usize>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a job. Fails if its work order is already present.
    pub fn insert(&mut self, job: Job) -> Result<()> {
        if self.index.contains_key(&job.work_order) {
            return Err(JobboardError::DuplicateWorkOrder(job.work_order));
        }
        debug!(work_order = %job.work_order, "job store: inserting job");
        self.index.insert(job.work_order.clone(), self.jobs.len());
        self.jobs.push(job);
        Ok(())
    }

    pub fn get(&self, work_order: &str) -> Option<&Job> {
        self.index.get(work_order).map(|&i| &self.jobs[i])
    }

    pub fn contains(&self, work_order: &str) -> bool {
        self.index.contains_key(work_order)
    }

    /// Update the status of an existing job.
    pub fn set_status(&mut self, work_order: &str, status: JobStatus) -> Result<()> {
        let i = *self
            .index
            .get(work_order)
            .ok_or_else(|| JobboardError::JobNotFound(work_order.to_string()))?;
        self.jobs[i].status = status;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Statuses present in the store, in order of first appearance.
    pub fn distinct_statuses(&self) -> Vec<JobStatus> {
        let mut out = Vec::new();
        for job in &self.jobs {
            if !out.contains(&job.status) {
                out.push(job.status);
            }
        }
        out
    }

    /// Operators present in the store, in order of first appearance.
    pub fn distinct_operators(&self) -> Vec<&str> {
        distinct_by(&self.jobs, |j| j.operator.as_str())
    }

    /// Machines present in the store, in order of first appearance.
    pub fn distinct_machines(&self) -> Vec<&str> {
        distinct_by(&self.jobs, |j| j.machine.as_str())
    }
}

fn distinct_by<'a>(jobs: &'a [Job], key: impl Fn(&'a Job) -> &'a str) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for job in jobs {
        let k = key(job);
        if !out.contains(&k) {
            out.push(k);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(wo: &str, machine: &str, operator: &str, status: JobStatus) -> Job {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Job {
            work_order: wo.into(),
            machine: machine.into(),
            operator: operator.into(),
            start_date: d,
            due_date: d,
            customer: "c".into(),
            part: "p".into(),
            pcs: 1,
            remarks: String::new(),
            status,
        }
    }

    #[test]
    fn duplicate_work_order_rejected() {
        let mut store = JobStore::new();
        store.insert(job("J1", "M1", "op", JobStatus::Scheduled)).unwrap();
        let err = store
            .insert(job("J1", "M2", "op", JobStatus::Delayed))
            .unwrap_err();
        assert!(matches!(err, JobboardError::DuplicateWorkOrder(wo) if wo == "J1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("J1").unwrap().machine, "M1");
    }

    #[test]
    fn set_status_on_unknown_job_fails() {
        let mut store = JobStore::new();
        let err = store.set_status("nope", JobStatus::Completed).unwrap_err();
        assert!(matches!(err, JobboardError::JobNotFound(_)));
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let mut store = JobStore::new();
        store.insert(job("J1", "Lathe", "bo", JobStatus::Delayed)).unwrap();
        store.insert(job("J2", "Mill", "al", JobStatus::Scheduled)).unwrap();
        store.insert(job("J3", "Lathe", "bo", JobStatus::Delayed)).unwrap();

        assert_eq!(
            store.distinct_statuses(),
            vec![JobStatus::Delayed, JobStatus::Scheduled]
        );
        assert_eq!(store.distinct_operators(), vec!["bo", "al"]);
        assert_eq!(store.distinct_machines(), vec!["Lathe", "Mill"]);
    }
}
