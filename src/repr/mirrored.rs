use super::*;

/// A graph that maintains an [`AdjList`] and an [`AdjMatrix`] side by side.
///
/// Every mutation is applied to both representations. Neighborhood iteration is served by
/// the list, pair queries (`has_edge`, `weight`) by the matrix. Both views always agree on
/// edge existence and weight, which [`MirroredGraph::is_consistent`] verifies.
#[derive(Debug, Clone)]
pub struct MirroredGraph {
    list: AdjList,
    matrix: AdjMatrix,
}

impl MirroredGraph {
    /// Returns the adjacency-list view
    pub fn list(&self) -> &AdjList {
        &self.list
    }

    /// Returns the adjacency-matrix view
    pub fn matrix(&self) -> &AdjMatrix {
        &self.matrix
    }

    /// Returns *true* if both views agree on all vertices, labels, edges and weights
    pub fn is_consistent(&self) -> bool {
        let n = self.list.number_of_nodes();
        if n != self.matrix.number_of_nodes()
            || self.list.number_of_edges() != self.matrix.number_of_edges()
        {
            return false;
        }

        self.list.vertices().all(|u| {
            self.list.label_of(u) == self.matrix.label_of(u)
                && self.list.degree_of(u) == self.matrix.degree_of(u)
                && self
                    .list
                    .neighbors_of(u)
                    .all(|(v, w)| self.matrix.try_weight(u, v) == Some(w))
        })
    }

    /// Applies the same mutation to both views; results must agree
    fn mirror<T, F>(&mut self, mut op: F) -> Result<T>
    where
        T: PartialEq + std::fmt::Debug,
        F: FnMut(&mut dyn MirroredMutation) -> Result<T>,
    {
        let from_list = op(&mut self.list);
        let from_matrix = op(&mut self.matrix);
        debug_assert_eq!(
            from_list.as_ref().ok(),
            from_matrix.as_ref().ok(),
            "list and matrix diverged"
        );
        from_matrix.and(from_list)
    }
}

/// Object-safe subset of the editing traits used to mirror mutations
trait MirroredMutation {
    fn insert_vertex_dyn(&mut self, label: String) -> Result<Node>;
    fn remove_vertex_dyn(&mut self, u: Node) -> Result<String>;
    fn insert_edge_dyn(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool>;
    fn remove_edge_dyn(&mut self, u: Node, v: Node) -> Result<bool>;
}

impl<Nbs: Neighborhood> MirroredMutation for Graph<Nbs> {
    fn insert_vertex_dyn(&mut self, label: String) -> Result<Node> {
        self.insert_vertex(label)
    }

    fn remove_vertex_dyn(&mut self, u: Node) -> Result<String> {
        self.remove_vertex(u)
    }

    fn insert_edge_dyn(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.insert_edge(u, v, weight)
    }

    fn remove_edge_dyn(&mut self, u: Node, v: Node) -> Result<bool> {
        self.remove_edge(u, v)
    }
}

impl GraphType for MirroredGraph {
    fn is_directed(&self) -> bool {
        self.list.is_directed()
    }

    fn is_weighted(&self) -> bool {
        self.list.is_weighted()
    }
}

impl GraphNodeOrder for MirroredGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.list.number_of_nodes()
    }
}

impl GraphEdgeOrder for MirroredGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.list.number_of_edges()
    }
}

impl AdjacencyList for MirroredGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.list.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.list.degree_of(u)
    }
}

impl AdjacencyTest for MirroredGraph {
    fn try_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.matrix.try_weight(u, v)
    }
}

impl LabelledVertices for MirroredGraph {
    fn label_of(&self, u: Node) -> Option<&str> {
        self.list.label_of(u)
    }

    fn index_of_label(&self, label: &str) -> Option<Node> {
        self.list.index_of_label(label)
    }

    fn id_of(&self, u: Node) -> Option<VertexId> {
        self.list.id_of(u)
    }

    fn index_of_id(&self, id: VertexId) -> Option<Node> {
        self.list.index_of_id(id)
    }
}

impl GraphNew for MirroredGraph {
    fn new(directed: bool, weighted: bool) -> Self {
        Self {
            list: AdjList::new(directed, weighted),
            matrix: AdjMatrix::new(directed, weighted),
        }
    }

    fn with_vertices(n: NumNodes, directed: bool, weighted: bool) -> Self {
        Self {
            list: AdjList::with_vertices(n, directed, weighted),
            matrix: AdjMatrix::with_vertices(n, directed, weighted),
        }
    }
}

impl GraphVertexEditing for MirroredGraph {
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> Result<Node> {
        let label = label.into();
        self.mirror(|g| g.insert_vertex_dyn(label.clone()))
    }

    fn remove_vertex(&mut self, u: Node) -> Result<String> {
        self.mirror(|g| g.remove_vertex_dyn(u))
    }
}

impl GraphEdgeEditing for MirroredGraph {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.mirror(|g| g.insert_edge_dyn(u, v, weight))
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.mirror(|g| g.remove_edge_dyn(u, v))
    }
}

crate::testing::test_graph_ops!(test_mirrored, MirroredGraph);
