//! Error type shared by the graph store, the algorithms and the IO layer.

use thiserror::Error;

use crate::node::*;

/// Every failure of this crate is reported as a `GraphError`; nothing aborts the process.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex index outside of `0..n`
    #[error("vertex index {index} is out of range for a graph with {len} vertices")]
    InvalidIndex {
        /// The offending index
        index: Node,
        /// Number of vertices at the time of the call
        len: NumNodes,
    },

    /// A vertex with this label already exists
    #[error("a vertex labelled {0:?} already exists")]
    DuplicateVertex(String),

    /// No vertex carries this label or id
    #[error("no vertex matches {0}")]
    UnknownVertex(String),

    /// NaN or infinite edge weight
    #[error("edge weight {0} is not a finite number")]
    InvalidWeight(Weight),

    /// Dijkstra requires non-negative weights
    #[error("edge ({origin},{destination}) has negative weight {weight}")]
    NegativeWeight {
        /// Tail of the edge
        origin: Node,
        /// Head of the edge
        destination: Node,
        /// The negative weight
        weight: Weight,
    },

    /// The input exceeds a configured size guard
    #[error("{what} supports at most {limit} vertices, got {len}")]
    TooLarge {
        /// The guarded operation
        what: &'static str,
        /// Configured limit
        limit: NumNodes,
        /// Actual size
        len: NumNodes,
    },

    /// Malformed input in strict parsing mode or an unusable header
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Underlying IO failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand used across the crate
pub type Result<T> = std::result::Result<T, GraphError>;
