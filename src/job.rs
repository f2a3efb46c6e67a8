// src/job.rs

//! Typed job records and dependency edges.

use std::fmt;

use chrono::NaiveDate;

use crate::types::{JobStatus, WorkOrder};

/// A manufacturing job order.
///
/// Dates are parsed when the job enters a session, so every `Job` in a
/// [`JobStore`](crate::store::JobStore) carries valid calendar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub work_order: WorkOrder,
    pub machine: String,
    pub operator: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub customer: String,
    pub part: String,
    pub pcs: u32,
    pub remarks: String,
    pub status: JobStatus,
}

impl Job {
    /// Label used when listing jobs: `"{icon} {work_order} - {part}"`.
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.status.icon(), self.work_order, self.part)
    }

    /// `true` if the job is due before it starts.
    pub fn has_inverted_dates(&self) -> bool {
        self.due_date < self.start_date
    }

    /// Field name / value pairs in traveler order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("work_order", self.work_order.clone()),
            ("machine", self.machine.clone()),
            ("operator", self.operator.clone()),
            ("start_date", self.start_date.to_string()),
            ("due_date", self.due_date.to_string()),
            ("customer", self.customer.clone()),
            ("part", self.part.clone()),
            ("pcs", self.pcs.to_string()),
            ("remarks", self.remarks.clone()),
            ("status", self.status.to_string()),
        ]
    }
}

/// "`predecessor` must complete before `successor` starts."
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub predecessor: WorkOrder,
    pub successor: WorkOrder,
}

impl DependencyEdge {
    pub fn new(predecessor: impl Into<WorkOrder>, successor: impl Into<WorkOrder>) -> Self {
        Self {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.predecessor, self.successor)
    }
}

impl<A: Into<WorkOrder>, B: Into<WorkOrder>> From<(A, B)> for DependencyEdge {
    fn from((predecessor, successor): (A, B)) -> Self {
        Self::new(predecessor, successor)
    }
}
