/*!
# Graph Operations

The traits in this module form the query contract every algorithm is written against.
No algorithm depends on a concrete representation: anything implementing
[`AdjacencyList`] (and [`AdjacencyTest`] where weights of arbitrary pairs are required)
can be traversed, searched, spanned and colored.

Mutations are split into [`GraphVertexEditing`] and [`GraphEdgeEditing`]. Both report
failures as [`GraphError`](crate::error::GraphError) values instead of panicking.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::*, node::*};

/// Flags fixed at construction (or by the header of a loaded file)
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges do not have an orientation
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns *true* if edge weights are meaningful.
    /// In unweighted graphs every edge has weight [`DEFAULT_WEIGHT`].
    fn is_weighted(&self) -> bool;
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over all vertices.
    /// As the range does not borrow `self`, it may be used while mutating the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a valid index
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Ok(())` if `u` is a valid index and `GraphError::InvalidIndex` otherwise
    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index: u,
                len: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// In undirected graphs, an edge and its mirror are counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over `(neighbor, weight)` of all outgoing edges of `u`.
    /// The order is the natural order of the representation.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the neighbors of `u` without weights
    /// ** Panics if `u >= n` **
    fn neighbor_nodes_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the neighbors of `u` in ascending order
    /// ** Panics if `u >= n` **
    fn sorted_neighbors_of(&self, u: Node) -> Vec<(Node, Weight)> {
        self.neighbors_of(u)
            .sorted_by_key(|&(v, _)| v)
            .collect_vec()
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree (`0` for empty graphs)
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the number of incoming edges of `u`.
    /// For undirected graphs this equals [`AdjacencyList::degree_of`].
    ///
    /// Directed representations only store outgoing edges, so this scans all vertices.
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        if self.is_undirected() {
            return self.degree_of(u);
        }

        self.vertices()
            .map(|v| self.neighbor_nodes_of(v).filter(|&w| w == u).count() as NumNodes)
            .sum()
    }

    /// Returns an iterator over all edges in canonical form:
    /// undirected edges are returned once with `origin <= destination`.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let directed = self.is_directed();
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&(v, _)| directed || u <= v)
                .map(move |(v, w)| WeightedEdge::new(u, v, w))
        })
    }

    /// Returns all canonical edges ordered by `(origin, destination)`
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        self.edges()
            .sorted_by_key(|e| (e.origin, e.destination))
            .collect_vec()
    }

    /// Returns the neighbor lists of the underlying undirected graph:
    /// in-neighbors are merged into out-neighbors for directed graphs, self-loops are dropped
    /// and every list is sorted and free of duplicates.
    fn undirected_adjacency(&self) -> Vec<Vec<Node>> {
        let mut adj: Vec<Vec<Node>> = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for v in self.neighbor_nodes_of(u) {
                if u == v {
                    continue;
                }
                adj[u as usize].push(v);
                if self.is_directed() {
                    adj[v as usize].push(u);
                }
            }
        }

        for nbs in &mut adj {
            nbs.sort_unstable();
            nbs.dedup();
        }
        adj
    }
}

/// Traits for constant-time (matrix) or linear-time (list) pair queries
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` if present.
    /// Returns `None` if the edge is absent or an endpoint is out of range.
    fn try_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.try_weight(u, v).is_some()
    }

    /// Returns the weight of the edge `(u, v)` or `0` if it is absent
    fn weight(&self, u: Node, v: Node) -> Weight {
        self.try_weight(u, v).unwrap_or(0.0)
    }
}

/// Access to the label, index and id bookkeeping of a graph
pub trait LabelledVertices: GraphNodeOrder {
    /// Returns the label of the vertex at index `u`
    fn label_of(&self, u: Node) -> Option<&str>;

    /// Returns the current index of the vertex labelled `label`
    fn index_of_label(&self, label: &str) -> Option<Node>;

    /// Returns the permanent id of the vertex at index `u`
    fn id_of(&self, u: Node) -> Option<VertexId>;

    /// Returns the current index of the vertex with id `id`
    fn index_of_id(&self, id: VertexId) -> Option<Node>;

    /// Returns all labels in index order
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().filter_map(|u| self.label_of(u))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with fixed flags
    fn new(directed: bool, weighted: bool) -> Self;

    /// Creates a graph with `n` vertices labelled `"0", "1", ..., "n-1"`
    fn with_vertices(n: NumNodes, directed: bool, weighted: bool) -> Self;
}

/// Insertion and removal of vertices
pub trait GraphVertexEditing: LabelledVertices {
    /// Inserts a new isolated vertex with the next free index and returns that index.
    ///
    /// # Errors
    /// Returns `GraphError::DuplicateVertex` if the label is already in use.
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> Result<Node>;

    /// Removes the vertex at index `u` together with all incident edges and returns its label.
    /// Every vertex with an index larger than `u` moves down by one.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `u >= n`.
    fn remove_vertex(&mut self, u: Node) -> Result<String>;

    /// Removes the vertex labelled `label` and returns its label
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if no vertex carries this label.
    fn remove_vertex_by_label(&mut self, label: &str) -> Result<String> {
        let u = self
            .index_of_label(label)
            .ok_or_else(|| GraphError::UnknownVertex(format!("label {label:?}")))?;
        self.remove_vertex(u)
    }

    /// Removes the vertex with permanent id `id` and returns its label
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if the id is unknown (e.g. already removed).
    fn remove_vertex_by_id(&mut self, id: VertexId) -> Result<String> {
        let u = self
            .index_of_id(id)
            .ok_or_else(|| GraphError::UnknownVertex(format!("id {id}")))?;
        self.remove_vertex(u)
    }
}

/// Insertion and removal of edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Inserts the edge `(u, v)` with weight `weight` (and its mirror in undirected graphs).
    /// Returns *true* if the edge was not present before; otherwise its weight is overwritten.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `u >= n || v >= n` and
    /// `GraphError::InvalidWeight` if `weight` is not finite.
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool>;

    /// Inserts the edge `(u, v)` with the default weight
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.insert_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Inserts all edges in the collection
    ///
    /// # Errors
    /// Stops at the first edge that cannot be inserted.
    fn insert_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        for e in edges {
            let e = e.into();
            self.insert_edge(e.origin, e.destination, e.weight)?;
        }
        Ok(())
    }

    /// Removes the edge `(u, v)` (and its mirror in undirected graphs).
    /// Returns *true* exactly if an edge was removed.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `u >= n || v >= n`.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph with `n` vertices (labelled by their index) and the given edges
    ///
    /// # Errors
    /// Fails if any edge references a vertex `>= n` or carries a non-finite weight.
    fn from_edges<I>(n: NumNodes, directed: bool, weighted: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, directed: bool, weighted: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        let mut graph = Self::with_vertices(n, directed, weighted);
        graph.insert_edges(edges)?;
        Ok(graph)
    }
}
