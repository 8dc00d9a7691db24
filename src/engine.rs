//! Lazily built, cached modularity state for one graph snapshot.

use crate::error::{Error, Result};
use crate::graph::{Edge, GraphSnapshot, Node};
use crate::modularity::{AdjacencyIndex, DegreeTable, GainTable};
use petgraph::graph::DiGraph;
use std::cell::{Cell, OnceCell};
use std::fmt::Debug;

/// How many times each table has actually been computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildCounts {
    /// Adjacency index builds.
    pub adjacency: usize,
    /// Degree table builds.
    pub degrees: usize,
    /// Gain table builds.
    pub gains: usize,
}

/// Builds the adjacency index, degree table and ΔQ table of a graph on
/// first access and returns the cached structure afterwards.
///
/// The engine owns its snapshot, so cached tables can never drift from the
/// input. It is `!Sync`: tables must not be requested from several threads.
///
/// ```rust
/// use dirmod::{Edge, ModularityEngine, Node};
///
/// let engine = ModularityEngine::builder()
///     .with_nodes(vec![Node::new("a", 0, 1), Node::new("b", 1, 0)])
///     .with_edges(vec![Edge::new("a", "b")])
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.gains().get(&"a", &"b"), Some(1.0));
/// ```
#[derive(Debug)]
pub struct ModularityEngine<N> {
    snapshot: GraphSnapshot<N>,
    adjacency: OnceCell<AdjacencyIndex<N>>,
    degrees: OnceCell<DegreeTable<N>>,
    gains: OnceCell<GainTable<N>>,
    adjacency_builds: Cell<usize>,
    degree_builds: Cell<usize>,
    gain_builds: Cell<usize>,
}

impl<N: Ord + Clone + Debug> ModularityEngine<N> {
    /// Start configuring an engine.
    pub fn builder() -> EngineBuilder<N> {
        EngineBuilder::new()
    }

    /// Wrap an already validated snapshot.
    pub fn from_snapshot(snapshot: GraphSnapshot<N>) -> Self {
        Self {
            snapshot,
            adjacency: OnceCell::new(),
            degrees: OnceCell::new(),
            gains: OnceCell::new(),
            adjacency_builds: Cell::new(0),
            degree_builds: Cell::new(0),
            gain_builds: Cell::new(0),
        }
    }

    /// Engine over a petgraph directed graph, counters derived from its edges.
    pub fn from_digraph<E>(graph: &DiGraph<N, E>) -> Result<Self> {
        GraphSnapshot::from_digraph(graph).map(Self::from_snapshot)
    }

    /// Edges grouped by source.
    pub fn adjacency(&self) -> &AdjacencyIndex<N> {
        self.adjacency.get_or_init(|| {
            bump(&self.adjacency_builds);
            AdjacencyIndex::build(self.snapshot.edges())
        })
    }

    /// Degree fractions for every node. Builds the adjacency index if needed.
    pub fn degrees(&self) -> &DegreeTable<N> {
        self.degrees.get_or_init(|| {
            let m = self.adjacency().edge_count();
            bump(&self.degree_builds);
            DegreeTable::build(self.snapshot.nodes(), m)
        })
    }

    /// Initial ΔQ table. Builds both other tables if needed.
    pub fn gains(&self) -> &GainTable<N> {
        self.gains.get_or_init(|| {
            let adjacency = self.adjacency();
            let degrees = self.degrees();
            bump(&self.gain_builds);
            GainTable::build(adjacency, degrees)
        })
    }

    /// Total edge count `m`.
    pub fn edge_count(&self) -> usize {
        self.adjacency().edge_count()
    }

    /// `1 / m`; infinite for an edgeless graph.
    pub fn rev_m(&self) -> f64 {
        self.adjacency().rev_m()
    }
}

impl<N> ModularityEngine<N> {
    /// The snapshot every table is derived from.
    pub fn snapshot(&self) -> &GraphSnapshot<N> {
        &self.snapshot
    }

    /// Number of times each builder has run so far.
    pub fn build_counts(&self) -> BuildCounts {
        BuildCounts {
            adjacency: self.adjacency_builds.get(),
            degrees: self.degree_builds.get(),
            gains: self.gain_builds.get(),
        }
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// Configuration for a [`ModularityEngine`].
///
/// Nodes and edges are both required; an empty collection counts as supplied.
#[derive(Debug, Clone)]
pub struct EngineBuilder<N> {
    nodes: Option<Vec<Node<N>>>,
    edges: Option<Vec<Edge<N>>>,
    check_counters: bool,
}

impl<N> Default for EngineBuilder<N> {
    fn default() -> Self {
        Self {
            nodes: None,
            edges: None,
            check_counters: false,
        }
    }
}

impl<N: Ord + Clone + Debug> EngineBuilder<N> {
    /// Builder with no inputs and counter checking disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node collection.
    pub fn with_nodes(mut self, nodes: Vec<Node<N>>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Set the edge collection.
    pub fn with_edges(mut self, edges: Vec<Edge<N>>) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Reject nodes whose counters disagree with the edge list.
    pub fn with_counter_check(mut self, enabled: bool) -> Self {
        self.check_counters = enabled;
        self
    }

    /// Validate the inputs and create the engine. No table is built yet.
    pub fn build(self) -> Result<ModularityEngine<N>> {
        match self.into_snapshot() {
            Ok(snapshot) => Ok(ModularityEngine::from_snapshot(snapshot)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "rejected modularity engine input");
                Err(err)
            }
        }
    }

    fn into_snapshot(self) -> Result<GraphSnapshot<N>> {
        let nodes = self.nodes.ok_or(Error::NodesRequired)?;
        let edges = self.edges.ok_or(Error::EdgesRequired)?;
        let snapshot = GraphSnapshot::new(nodes, edges)?;
        if self.check_counters {
            snapshot.check_counters()?;
        }
        Ok(snapshot)
    }
}
