//! Per-node degree fractions.

use crate::graph::Node;
use std::collections::BTreeMap;

/// A node's edge counters divided by the graph-wide edge count `m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degree {
    /// `inbound / m`.
    pub inbound: f64,
    /// `outbound / m`.
    pub outbound: f64,
}

/// Degree fractions for every node of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeTable<N> {
    degrees: BTreeMap<N, Degree>,
}

/// `count / m`, except that an empty counter stays exactly zero.
///
/// A positive counter over `m == 0` is infinite and is passed through.
fn fraction(count: usize, m: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        count as f64 / m as f64
    }
}

impl<N: Ord + Clone> DegreeTable<N> {
    /// One entry per node, isolated nodes included.
    ///
    /// The denominator is always `edge_count`, never the node's own degree,
    /// so equal counters give equal fractions.
    pub fn build(nodes: &[Node<N>], edge_count: usize) -> Self {
        let degrees: BTreeMap<N, Degree> = nodes
            .iter()
            .map(|node| {
                let degree = Degree {
                    inbound: fraction(node.inbound, edge_count),
                    outbound: fraction(node.outbound, edge_count),
                };
                (node.id.clone(), degree)
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = degrees.len(), edge_count, "built degree table");

        Self { degrees }
    }

    /// Degree fractions of `id`.
    pub fn get(&self, id: &N) -> Option<Degree> {
        self.degrees.get(id).copied()
    }
}

impl<N> DegreeTable<N> {
    /// Iterate `(id, degree)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, Degree)> {
        self.degrees.iter().map(|(id, d)| (id, *d))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True if the snapshot had no nodes.
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}
