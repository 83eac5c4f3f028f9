/*!
# Edges

An [`Edge`] is a plain pair of endpoints; whether it is directed is decided by the graph it is
used with. A [`WeightedEdge`] additionally carries the weight and is what the query traits report.
*/

use std::fmt::{Debug, Display};

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge {
            origin: self.0,
            destination: self.1,
            weight,
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed link `origin -> destination` carrying a weight.
///
/// In undirected graphs, a `WeightedEdge` stands for both directions.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    /// Tail of the edge
    pub origin: Node,
    /// Head of the edge
    pub destination: Node,
    /// Weight of the edge
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a new weighted edge
    pub fn new(origin: Node, destination: Node, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.origin, self.destination)
    }

    /// Normalizes the endpoints such that the smaller index comes first
    pub fn normalized(&self) -> Self {
        let Edge(origin, destination) = self.edge().normalized();
        Self {
            origin,
            destination,
            weight: self.weight,
        }
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.origin, self.destination, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge::new(value.0, value.1, DEFAULT_WEIGHT)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        value.with_weight(DEFAULT_WEIGHT)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
