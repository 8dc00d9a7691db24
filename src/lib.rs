//! # dirmod
//!
//! Initial state for directed, greedy agglomerative community detection:
//! an adjacency index, per-node degree fractions and the pairwise modularity
//! gain (ΔQ) table a merge driver starts from.
//!
//! ```rust
//! use dirmod::{Edge, ModularityEngine, Node};
//!
//! let engine = ModularityEngine::builder()
//!     .with_nodes(vec![
//!         Node::new("a", 1, 1),
//!         Node::new("b", 1, 1),
//!         Node::new("c", 0, 0),
//!     ])
//!     .with_edges(vec![Edge::new("a", "b"), Edge::new("b", "a")])
//!     .with_counter_check(true)
//!     .build()?;
//!
//! assert_eq!(engine.edge_count(), 2);
//! assert_eq!(engine.gains().len(), 1);
//! # Ok::<(), dirmod::Error>(())
//! ```
//!
//! Tables are built on first access and cached. The optional `tracing`
//! feature emits a debug event per table build.

/// Lazily built, cached tables over one snapshot.
pub mod engine;
/// Error types used across `dirmod`.
pub mod error;
/// Input node and edge types.
pub mod graph;
pub mod metrics;
pub mod modularity;


pub use engine::{BuildCounts, EngineBuilder, ModularityEngine};
pub use error::{Direction, Error, Result};
pub use graph::{Edge, GraphSnapshot, Node};
pub use metrics::{community_count, directed_modularity};
pub use modularity::{AdjacencyIndex, Degree, DegreeTable, GainTable};
