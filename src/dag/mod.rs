// src/dag/mod.rs

//! Dependency graph and conflict checking.
//!
//! - [`graph`] derives a simple directed graph from a dependency edge list.
//! - [`conflicts`] compares predecessor due dates with successor start dates.

pub mod conflicts;
pub mod graph;

pub use conflicts::{Conflict, ConflictReport, UnresolvedReference, check_conflicts};
pub use graph::DependencyGraph;
