// src/query.rs

use std::collections::HashSet;

use crate::job::Job;
use crate::store::JobStore;
use crate::types::JobStatus;

/// Inclusion sets for the three filterable job dimensions.
///
/// A job passes when its status, operator and machine are all in their sets.
/// An empty set lets nothing through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub statuses: HashSet<JobStatus>,
    pub operators: HashSet<String>,
    pub machines: HashSet<String>,
}

impl JobFilter {
    /// Filter that includes every value present in `store`: the unfiltered view.
    pub fn all_of(store: &JobStore) -> Self {
        Self {
            statuses: store.distinct_statuses().into_iter().collect(),
            operators: store.distinct_operators().into_iter().map(String::from).collect(),
            machines: store.distinct_machines().into_iter().map(String::from).collect(),
        }
    }

    /// Restrict statuses; leaves the other dimensions untouched.
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn with_operators<S: Into<String>>(mut self, operators: impl IntoIterator<Item = S>) -> Self {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_machines<S: Into<String>>(mut self, machines: impl IntoIterator<Item = S>) -> Self {
        self.machines = machines.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.statuses.contains(&job.status)
            && self.operators.contains(&job.operator)
            && self.machines.contains(&job.machine)
    }
}

/// Jobs passing `filter`, in store order.
pub fn filter_jobs<'a>(store: &'a JobStore, filter: &JobFilter) -> Vec<&'a Job> {
    store.iter().filter(|job| filter.matches(job)).collect()
}
