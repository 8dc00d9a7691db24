//! Partition quality for directed graphs.
//!
//! A merge driver consuming [`crate::GainTable`] ends with a partition of the
//! nodes; [`directed_modularity`] scores it so different runs can be compared.
//!
//! ```text
//! Q = (1/m) × Σ_ij [A_ij - k_i^out × k_j^in / m] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = number of edges
//! - A_ij = number of edges i -> j
//! - k_i^out, k_j^in = the nodes' outbound and inbound counters
//! - δ(c_i, c_j) = 1 if i and j share a community
//!
//! # Example
//!
//! ```rust
//! use dirmod::{directed_modularity, Edge, GraphSnapshot, Node};
//! use std::collections::BTreeMap;
//!
//! let snapshot = GraphSnapshot::new(
//!     vec![Node::new("a", 1, 1), Node::new("b", 1, 1)],
//!     vec![Edge::new("a", "b"), Edge::new("b", "a")],
//! )
//! .unwrap();
//!
//! let together = BTreeMap::from([("a", 0), ("b", 0)]);
//! assert_eq!(directed_modularity(&snapshot, &together).unwrap(), 0.0);
//! ```
//!
//! # References
//!
//! - Leicht & Newman (2008). "Community structure in directed networks."

use crate::error::{Error, Result};
use crate::graph::GraphSnapshot;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Directed modularity of `partition` (node id -> community id).
///
/// Every node of the snapshot must be assigned. Returns `0.0` for a graph
/// with no edges.
pub fn directed_modularity<N: Ord + Clone + Debug>(
    snapshot: &GraphSnapshot<N>,
    partition: &BTreeMap<N, usize>,
) -> Result<f64> {
    let community = |id: &N| {
        partition
            .get(id)
            .copied()
            .ok_or_else(|| Error::unknown_node(id))
    };

    // Per-community (outbound, inbound) counter sums.
    let mut totals: BTreeMap<usize, (f64, f64)> = BTreeMap::new();
    for node in snapshot.nodes() {
        let entry = totals.entry(community(&node.id)?).or_default();
        entry.0 += node.outbound as f64;
        entry.1 += node.inbound as f64;
    }

    let m = snapshot.edges().len() as f64;
    if m == 0.0 {
        return Ok(0.0);
    }

    let mut internal = 0.0;
    for edge in snapshot.edges() {
        if community(&edge.source)? == community(&edge.target)? {
            internal += 1.0;
        }
    }

    let expected: f64 = totals.values().map(|(out, inn)| out * inn).sum::<f64>() / m;

    Ok((internal - expected) / m)
}

/// Number of distinct communities in `partition`.
pub fn community_count<N>(partition: &BTreeMap<N, usize>) -> usize {
    let mut ids: Vec<usize> = partition.values().copied().collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn two_pairs() -> GraphSnapshot<u32> {
        // 0 <-> 1, 2 <-> 3, bridged by 1 -> 2
        GraphSnapshot::new(
            vec![
                Node::new(0, 1, 1),
                Node::new(1, 1, 2),
                Node::new(2, 2, 1),
                Node::new(3, 1, 1),
            ],
            vec![
                Edge::new(0, 1),
                Edge::new(1, 0),
                Edge::new(2, 3),
                Edge::new(3, 2),
                Edge::new(1, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_single_community_is_zero() {
        let snapshot = two_pairs();
        let partition: BTreeMap<u32, usize> = (0..4).map(|i| (i, 0)).collect();
        let q = directed_modularity(&snapshot, &partition).unwrap();
        assert!(q.abs() < 1e-12);
    }

    #[test]
    fn test_natural_split_beats_singletons() {
        let snapshot = two_pairs();
        let split = BTreeMap::from([(0, 0), (1, 0), (2, 1), (3, 1)]);
        let singletons = BTreeMap::from([(0, 0), (1, 1), (2, 2), (3, 3)]);

        let q_split = directed_modularity(&snapshot, &split).unwrap();
        let q_single = directed_modularity(&snapshot, &singletons).unwrap();

        // split: internal 4, expected (3*2 + 2*3) / 5 = 2.4 -> (4 - 2.4) / 5
        assert!((q_split - 0.32).abs() < 1e-12);
        assert!(q_split > q_single);
        assert_eq!(community_count(&split), 2);
    }

    #[test]
    fn test_missing_assignment() {
        let snapshot = two_pairs();
        let partial = BTreeMap::from([(0, 0), (1, 0)]);
        let err = directed_modularity(&snapshot, &partial).unwrap_err();
        assert_eq!(err, Error::UnknownNode { id: "2".to_string() });
    }

    #[test]
    fn test_edgeless_graph() {
        let snapshot = GraphSnapshot::new(vec![Node::new("a", 0, 0)], vec![]).unwrap();
        let partition = BTreeMap::from([("a", 0)]);
        assert_eq!(directed_modularity(&snapshot, &partition).unwrap(), 0.0);
    }
}
