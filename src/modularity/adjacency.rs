//! Edges grouped by source node.

use crate::graph::Edge;
use std::collections::BTreeMap;

/// Multi-map from a source identifier to the targets of its outgoing edges.
///
/// One target entry per edge: parallel edges repeat the target and a
/// self-loop lists the source itself. Targets keep edge iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyIndex<N> {
    targets: BTreeMap<N, Vec<N>>,
    edge_count: usize,
}

impl<N: Ord + Clone> AdjacencyIndex<N> {
    /// Group `edges` by source in a single pass.
    pub fn build(edges: &[Edge<N>]) -> Self {
        let mut targets: BTreeMap<N, Vec<N>> = BTreeMap::new();
        for edge in edges {
            targets
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sources = targets.len(),
            edges = edges.len(),
            "built adjacency index"
        );

        Self {
            targets,
            edge_count: edges.len(),
        }
    }

    /// Targets of edges leaving `source`, or `None` if it has no out-edges.
    pub fn targets(&self, source: &N) -> Option<&[N]> {
        self.targets.get(source).map(Vec::as_slice)
    }
}

impl<N> AdjacencyIndex<N> {
    /// Iterate `(source, targets)` in ascending source order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.targets.iter().map(|(s, t)| (s, t.as_slice()))
    }

    /// Number of distinct sources.
    pub fn source_count(&self) -> usize {
        self.targets.len()
    }

    /// Total number of target entries across all sources.
    pub fn entry_count(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    /// Total edge count `m`.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `1 / m`. Infinite when the graph has no edges.
    pub fn rev_m(&self) -> f64 {
        1.0 / self.edge_count as f64
    }
}
