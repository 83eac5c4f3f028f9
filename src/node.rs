/*!
# Vertex Representation

Vertices are addressed by a dense index `Node = u32` in `0..n`.
Removing a vertex compacts the index space, so every vertex additionally owns a
permanent [`VertexId`] which survives removals of other vertices.

Edge weights are `f64` and colors are plain `u32` indices.
*/

use std::{
    fmt::{Debug, Display},
    num::NonZero,
};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Weight attached to every edge. Unweighted graphs use `1.0` for all edges.
pub type Weight = f64;

/// Weight used for edges inserted without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// A color is the index of a color class
pub type Color = u32;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a valid index and thus safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Permanent handle of a vertex.
///
/// Ids are allocated from a per-graph counter on insertion and are never reused,
/// even after the vertex is removed. In contrast to its [`Node`]-index, the id of a
/// vertex does not change when vertices with a smaller index are removed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node() {
        assert_eq!(OptionalNode::new(3).map(|x| x.get()), Some(3));
        assert_eq!(OptionalNode::new(0).map(|x| x.get()), Some(0));
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }
}
