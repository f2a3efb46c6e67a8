// src/dag/conflicts.rs

//! Dependency conflict detection.
//!
//! A conflict is a dependency edge `(a, b)` where job `b` is scheduled to
//! start strictly before job `a` is due. Edges whose endpoints are not both in
//! the job store cannot be checked; they are collected as
//! [`UnresolvedReference`]s instead of being reported as errors.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::job::DependencyEdge;
use crate::store::JobStore;
use crate::types::WorkOrder;

/// A dependency edge whose successor starts before its predecessor is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub predecessor: WorkOrder,
    pub successor: WorkOrder,
    pub predecessor_due: NaiveDate,
    pub successor_start: NaiveDate,
}

impl Conflict {
    /// `"{successor} starts before its dependency {predecessor} completes."`
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} starts before its dependency {} completes.",
            self.successor, self.predecessor
        )
    }
}

/// A dependency edge that was skipped because a work order is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub edge: DependencyEdge,
    /// Endpoints missing from the job store (one or both).
    pub missing: Vec<WorkOrder>,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dependency {} references unknown work order(s): {}",
            self.edge,
            self.missing.join(", ")
        )
    }
}

/// Result of a conflict check, in input edge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl ConflictReport {
    /// `true` when no edge is in conflict.
    ///
    /// Unresolved references do not make a report dirty.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.conflicts.iter().map(Conflict::message).collect()
    }
}

/// Check every dependency edge against the job store.
///
/// Duplicate edges are checked once per occurrence.
pub fn check_conflicts<'a, I>(store: &JobStore, edges: I) -> ConflictReport
where
    I: IntoIterator<Item = &'a DependencyEdge>,
{
    let mut report = ConflictReport::default();

    for edge in edges {
        let (a, b) = match (store.get(&edge.predecessor), store.get(&edge.successor)) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                let mut missing = Vec::new();
                if a.is_none() {
                    missing.push(edge.predecessor.clone());
                }
                if b.is_none() && edge.successor != edge.predecessor {
                    missing.push(edge.successor.clone());
                }
                debug!(%edge, ?missing, "skipping dependency with unknown work order");
                report.unresolved.push(UnresolvedReference {
                    edge: edge.clone(),
                    missing,
                });
                continue;
            }
        };

        if b.start_date < a.due_date {
            debug!(
                %edge,
                due = %a.due_date,
                start = %b.start_date,
                "dependency conflict"
            );
            report.conflicts.push(Conflict {
                predecessor: edge.predecessor.clone(),
                successor: edge.successor.clone(),
                predecessor_due: a.due_date,
                successor_start: b.start_date,
            });
        }
    }

    report
}
