//! Input graph types.
//!
//! The engine reads a graph exactly once, as an owned [`GraphSnapshot`].
//! Because the snapshot is moved into the engine, nodes and edges cannot
//! change after a table has been built, so cached tables never go stale.

use crate::error::{Direction, Error, Result};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A graph node with pre-computed directed edge counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<N> {
    /// Stable, orderable identifier.
    pub id: N,
    /// Number of edges terminating at this node.
    pub inbound: usize,
    /// Number of edges originating at this node.
    pub outbound: usize,
}

impl<N> Node<N> {
    /// Create a node with the given counters.
    pub fn new(id: N, inbound: usize, outbound: usize) -> Self {
        Self {
            id,
            inbound,
            outbound,
        }
    }
}

/// A directed edge between two node identifiers.
///
/// Parallel edges and self-loops are legal; each edge counts separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    /// Identifier of the originating node.
    pub source: N,
    /// Identifier of the terminating node.
    pub target: N,
}

impl<N> Edge<N> {
    /// Create an edge `source -> target`.
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

/// An immutable, validated set of nodes and edges.
#[derive(Debug, Clone)]
pub struct GraphSnapshot<N> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<N>>,
}

impl<N: Ord + Clone + Debug> GraphSnapshot<N> {
    /// Assemble a snapshot, rejecting duplicate node ids and dangling edges.
    ///
    /// Counters are taken as supplied; see [`GraphSnapshot::check_counters`].
    pub fn new(nodes: Vec<Node<N>>, edges: Vec<Edge<N>>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for node in &nodes {
            if !seen.insert(&node.id) {
                return Err(Error::duplicate_node(&node.id));
            }
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint) {
                    return Err(Error::unknown_node(endpoint));
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Build a snapshot from a petgraph directed graph.
    ///
    /// Node weights become identifiers. Counters are derived from the graph's
    /// edges; a self-loop adds one to both counters of its node.
    pub fn from_digraph<E>(graph: &DiGraph<N, E>) -> Result<Self> {
        let mut inbound = vec![0usize; graph.node_count()];
        let mut outbound = vec![0usize; graph.node_count()];
        let mut edges = Vec::with_capacity(graph.edge_count());

        for edge in graph.edge_references() {
            let (s, t) = (edge.source(), edge.target());
            outbound[s.index()] += 1;
            inbound[t.index()] += 1;
            edges.push(Edge::new(graph[s].clone(), graph[t].clone()));
        }

        let nodes = graph
            .node_indices()
            .map(|idx| {
                Node::new(
                    graph[idx].clone(),
                    inbound[idx.index()],
                    outbound[idx.index()],
                )
            })
            .collect();

        Self::new(nodes, edges)
    }

    /// Check every node's counters against the degrees implied by the edges.
    ///
    /// Returns the first disagreement in node order, inbound before outbound.
    pub fn check_counters(&self) -> Result<()> {
        let mut observed: BTreeMap<&N, (usize, usize)> = BTreeMap::new();
        for edge in &self.edges {
            observed.entry(&edge.target).or_default().0 += 1;
            observed.entry(&edge.source).or_default().1 += 1;
        }

        for node in &self.nodes {
            let (inbound, outbound) = observed.get(&node.id).copied().unwrap_or_default();
            if node.inbound != inbound {
                return Err(Error::CounterMismatch {
                    id: format!("{:?}", node.id),
                    direction: Direction::Inbound,
                    expected: inbound,
                    found: node.inbound,
                });
            }
            if node.outbound != outbound {
                return Err(Error::CounterMismatch {
                    id: format!("{:?}", node.id),
                    direction: Direction::Outbound,
                    expected: outbound,
                    found: node.outbound,
                });
            }
        }
        Ok(())
    }
}

impl<N> GraphSnapshot<N> {
    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }
}
