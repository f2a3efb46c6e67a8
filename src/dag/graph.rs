// src/dag/graph.rs

use std::collections::HashMap;
use std::fmt;

use petgraph::Direction;
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::errors::{JobboardError, Result};
use crate::job::DependencyEdge;

/// Edge weight: "source must finish before target starts".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedes;

impl fmt::Display for Precedes {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Simple directed graph of work orders, derived from a dependency edge list.
///
/// Built fresh on every evaluation; it owns copies of the identifiers so it
/// can outlive the edge list it came from. Repeated edges collapse into one,
/// self-loops are kept, and identifiers with no matching job become plain
/// nodes without any job attached.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, Precedes>,
    nodes: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Build a graph from `(predecessor, successor)` edges, in order.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a DependencyEdge>,
    {
        let mut dag = Self::default();
        for edge in edges {
            dag.add_edge(&edge.predecessor, &edge.successor);
        }
        dag
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, predecessor: &str, successor: &str) {
        let a = self.node(predecessor);
        let b = self.node(successor);
        // `update_edge` only adds when the edge is missing.
        self.graph.update_edge(a, b, Precedes);
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// All work orders, in order of first appearance in the edge list.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|i| self.graph[i].as_str())
    }

    /// All distinct directed edges, in order of first insertion.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str()))
            .collect()
    }

    /// Immediate dependencies of a work order (edges pointing into it).
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.neighbours(name, Direction::Incoming)
    }

    /// Immediate dependents of a work order (edges leaving it).
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.neighbours(name, Direction::Outgoing)
    }

    fn neighbours(&self, name: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges_directed(idx, dir).collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| {
                let other = match dir {
                    Direction::Incoming => e.source(),
                    Direction::Outgoing => e.target(),
                };
                self.graph[other].as_str()
            })
            .collect()
    }

    /// `true` if the dependencies can never all be satisfied.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Work orders ordered so that every predecessor precedes its successors.
    pub fn topological_order(&self) -> Result<Vec<&str>> {
        match toposort(&self.graph, None) {
            Ok(order) => Ok(order.into_iter().map(|i| self.graph[i].as_str()).collect()),
            Err(cycle) => Err(JobboardError::DependencyCycle(format!(
                "cycle detected in dependency graph involving work order '{}'",
                self.graph[cycle.node_id()]
            ))),
        }
    }

    /// Graphviz rendering for external layout tools.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}
