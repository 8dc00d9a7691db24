//! Pairwise modularity gain (ΔQ) accumulator.
//!
//! For every edge `src -> tar` the term
//!
//! ```text
//! revM - degree(src).inbound * degree(tar).outbound
//! ```
//!
//! is added into the cell keyed by the pair in ascending order. The term keeps
//! the edge's own source/target roles; only the storage key is canonical, so
//! `a -> b` and `b -> a` both land in `dQ[min][max]` with different terms.
//!
//! Note the pairing: the source's *inbound* fraction with the target's
//! *outbound* fraction, not the textbook `out(src) * in(tar)`.

use super::adjacency::AdjacencyIndex;
use super::degree::DegreeTable;
use std::collections::BTreeMap;

/// Initial ΔQ table for greedy agglomerative merging.
///
/// Stored as `dQ[i][j]` with `i < j`. Self-loops never create a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GainTable<N> {
    cells: BTreeMap<N, BTreeMap<N, f64>>,
}

impl<N: Ord + Clone> GainTable<N> {
    /// Accumulate one term per edge of `adjacency`.
    ///
    /// A node missing from `degrees` contributes `NaN`.
    pub fn build(adjacency: &AdjacencyIndex<N>, degrees: &DegreeTable<N>) -> Self {
        let rev_m = adjacency.rev_m();
        let mut cells: BTreeMap<N, BTreeMap<N, f64>> = BTreeMap::new();

        for (src, targets) in adjacency.iter() {
            let src_in = degrees.get(src).map_or(f64::NAN, |d| d.inbound);
            for tar in targets {
                let (lo, hi) = match src.cmp(tar) {
                    std::cmp::Ordering::Less => (src, tar),
                    std::cmp::Ordering::Greater => (tar, src),
                    std::cmp::Ordering::Equal => continue,
                };
                let tar_out = degrees.get(tar).map_or(f64::NAN, |d| d.outbound);
                let term = rev_m - src_in * tar_out;
                *cells
                    .entry(lo.clone())
                    .or_default()
                    .entry(hi.clone())
                    .or_insert(0.0) += term;
            }
        }

        let table = Self { cells };

        #[cfg(feature = "tracing")]
        tracing::debug!(pairs = table.len(), rev_m, "built modularity gain table");

        table
    }

    /// Exact cell `dQ[i][j]`. Always `None` unless `i < j`.
    pub fn get(&self, i: &N, j: &N) -> Option<f64> {
        self.cells.get(i)?.get(j).copied()
    }

    /// Cell for the unordered pair `{a, b}`.
    pub fn get_unordered(&self, a: &N, b: &N) -> Option<f64> {
        if a <= b {
            self.get(a, b)
        } else {
            self.get(b, a)
        }
    }

    /// All cells `dQ[i][*]`, keyed by the larger identifier.
    pub fn row(&self, i: &N) -> Option<&BTreeMap<N, f64>> {
        self.cells.get(i)
    }
}

impl<N> GainTable<N> {
    /// Iterate `(i, j, dQ)` in ascending `(i, j)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, f64)> {
        self.cells
            .iter()
            .flat_map(|(i, row)| row.iter().map(move |(j, v)| (i, j, *v)))
    }

    /// Number of populated pairs.
    pub fn len(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    /// True if no pair is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Largest cell; ties go to the smallest key. `NaN` cells are skipped.
    ///
    /// This is the pair a greedy merge driver would join first.
    pub fn max_entry(&self) -> Option<(&N, &N, f64)> {
        let mut best: Option<(&N, &N, f64)> = None;
        for (i, j, v) in self.iter() {
            if v.is_nan() {
                continue;
            }
            match best {
                Some((_, _, b)) if v <= b => {}
                _ => best = Some((i, j, v)),
            }
        }
        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn table(
        nodes: &[Node<&'static str>],
        edges: &[Edge<&'static str>],
    ) -> GainTable<&'static str> {
        let adjacency = AdjacencyIndex::build(edges);
        let degrees = DegreeTable::build(nodes, adjacency.edge_count());
        GainTable::build(&adjacency, &degrees)
    }

    #[test]
    fn test_reverse_edge_uses_edge_roles() {
        // b -> a, a -> c: a has in=1 out=1, b out=1, c in=1
        let nodes = [
            Node::new("a", 1, 1),
            Node::new("b", 0, 1),
            Node::new("c", 1, 0),
        ];
        let edges = [Edge::new("b", "a"), Edge::new("a", "c")];
        let dq = table(&nodes, &edges);

        // b -> a: 0.5 - in(b) * out(a) = 0.5 - 0 * 0.5
        assert!((dq.get(&"a", &"b").unwrap() - 0.5).abs() < 1e-12);
        assert!(dq.get(&"b", &"a").is_none());
        assert_eq!(dq.get_unordered(&"b", &"a"), dq.get(&"a", &"b"));

        // a -> c: 0.5 - in(a) * out(c) = 0.5 - 0.5 * 0
        assert!((dq.get(&"a", &"c").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(dq.len(), 2);
    }

    #[test]
    fn test_both_directions_share_a_cell() {
        let nodes = [Node::new("a", 1, 1), Node::new("b", 1, 1)];
        let edges = [Edge::new("a", "b"), Edge::new("b", "a")];
        let dq = table(&nodes, &edges);

        // Each term: 0.5 - 0.5 * 0.5 = 0.25
        assert_eq!(dq.len(), 1);
        assert!((dq.get(&"a", &"b").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(dq.row(&"a").unwrap().len(), 1);
        assert!(dq.row(&"b").is_none());
    }

    #[test]
    fn test_self_loops_excluded() {
        let nodes = [Node::new("a", 1, 2), Node::new("b", 1, 0)];
        let edges = [Edge::new("a", "a"), Edge::new("a", "b")];
        let dq = table(&nodes, &edges);

        assert!(dq.get(&"a", &"a").is_none());
        assert_eq!(dq.len(), 1);
        // m = 2: 0.5 - in(a) * out(b) = 0.5 - 0.5 * 0
        assert!((dq.get(&"a", &"b").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_max_entry() {
        let nodes = [
            Node::new("a", 0, 2),
            Node::new("b", 2, 1),
            Node::new("c", 1, 0),
        ];
        let edges = [
            Edge::new("a", "b"),
            Edge::new("b", "c"),
            Edge::new("a", "b"),
        ];
        let dq = table(&nodes, &edges);

        // a -> b twice: 2 * (1/3 - 0 * 1/3); b -> c: 1/3 - (2/3) * 0
        let (i, j, v) = dq.max_entry().unwrap();
        assert_eq!((*i, *j), ("a", "b"));
        assert!((v - 2.0 / 3.0).abs() < 1e-12);

        let ordered: Vec<_> = dq.iter().map(|(i, j, _)| (*i, *j)).collect();
        assert_eq!(ordered, vec![("a", "b"), ("b", "c")]);
    }

    #[test]
    fn test_empty() {
        let dq = table(&[Node::new("a", 0, 0)], &[]);
        assert!(dq.is_empty());
        assert_eq!(dq.len(), 0);
        assert!(dq.max_entry().is_none());
    }
}
