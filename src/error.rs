use core::fmt;

/// Result alias for `dirmod`.
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a node's degree a counter describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Edges terminating at the node.
    Inbound,
    /// Edges originating at the node.
    Outbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => write!(f, "inbound"),
            Direction::Outbound => write!(f, "outbound"),
        }
    }
}

/// Errors returned while assembling a graph snapshot or scoring a partition.
///
/// Every variant is a caller-input problem detected before any table is built.
/// Numeric degeneracy (a graph with no edges) is not an error; it surfaces as
/// non-finite values in the derived tables.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The node collection was never supplied.
    NodesRequired,

    /// The edge collection was never supplied.
    EdgesRequired,

    /// Two nodes share an identifier.
    DuplicateNode {
        /// Offending identifier (debug-formatted).
        id: String,
    },

    /// An identifier is not among the snapshot's nodes.
    UnknownNode {
        /// Offending identifier (debug-formatted).
        id: String,
    },

    /// A node's supplied counter disagrees with the edge list.
    CounterMismatch {
        /// Node identifier (debug-formatted).
        id: String,
        /// Which counter disagrees.
        direction: Direction,
        /// Count implied by the edge list.
        expected: usize,
        /// Count supplied on the node.
        found: usize,
    },
}

impl Error {
    pub(crate) fn duplicate_node<N: fmt::Debug>(id: &N) -> Self {
        Error::DuplicateNode {
            id: format!("{id:?}"),
        }
    }

    pub(crate) fn unknown_node<N: fmt::Debug>(id: &N) -> Self {
        Error::UnknownNode {
            id: format!("{id:?}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NodesRequired => write!(f, "nodes required"),
            Error::EdgesRequired => write!(f, "edges required"),
            Error::DuplicateNode { id } => write!(f, "duplicate node {id}"),
            Error::UnknownNode { id } => write!(f, "unknown node {id}"),
            Error::CounterMismatch {
                id,
                direction,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{direction} counter mismatch on node {id}: expected {expected}, found {found}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
