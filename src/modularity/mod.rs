//! Directed modularity-gain tables.
//!
//! Greedy agglomerative community detection (Clauset, Newman & Moore 2004)
//! starts with every node in its own community and repeatedly joins the pair
//! whose merge increases modularity the most. This module builds the state
//! that process starts from:
//!
//! 1. [`AdjacencyIndex`]: edges grouped by source; fixes `m` and `1/m`.
//! 2. [`DegreeTable`]: in/out counters of each node divided by `m`.
//! 3. [`GainTable`]: ΔQ per connected node pair, keyed smaller-id first.
//!
//! Each stage depends on the ones before it. [`crate::ModularityEngine`]
//! builds them lazily and caches them.
//!
//! ## Degree fractions
//!
//! Fractions are taken over the total edge count, not the node's own degree:
//!
//! ```text
//! in(v)  = k_in(v)  / m
//! out(v) = k_out(v) / m
//! ```
//!
//! ## Empty graphs
//!
//! With `m = 0`, `1/m` is infinite. The tables are still built: isolated
//! nodes get zero fractions and the gain table is empty. Callers that need
//! finite values must reject edgeless graphs themselves.
//!
//! ## References
//!
//! - Clauset, Newman, Moore (2004). "Finding community structure in very
//!   large networks." Phys. Rev. E 70, 066111.
//! - Leicht & Newman (2008). "Community structure in directed networks."
//!   Phys. Rev. Lett. 100, 118703.

mod adjacency;
mod degree;
mod gain;

pub use adjacency::AdjacencyIndex;
pub use degree::{Degree, DegreeTable};
pub use gain::GainTable;
