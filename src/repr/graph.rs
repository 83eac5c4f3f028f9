use tracing::warn;

use super::*;

/// A labelled, weighted graph storing one [`Neighborhood`] per vertex.
///
/// The `directed` and `weighted` flags are fixed at construction. In an undirected graph,
/// every edge `(u, v)` is stored in the neighborhoods of both `u` and `v`.
#[derive(Debug, Clone)]
pub struct Graph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    labels: VertexLabels,
    num_edges: NumEdges,
    directed: bool,
    weighted: bool,
}

/// Representation using Adjacency-Lists
pub type AdjList = Graph<ListNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrix = Graph<MatrixNeighborhood>;

impl<Nbs: Neighborhood> Graph<Nbs> {
    /// Checks the weight of an edge about to be inserted and maps it to the stored weight
    fn stored_weight(&self, weight: Weight) -> Result<Weight> {
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }

        if self.weighted {
            Ok(weight)
        } else {
            if weight != DEFAULT_WEIGHT {
                warn!(weight, "graph is unweighted, storing edge with weight 1");
            }
            Ok(DEFAULT_WEIGHT)
        }
    }
}

impl<Nbs: Neighborhood> GraphType for Graph<Nbs> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for Graph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Graph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Graph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for Graph<Nbs> {
    fn try_weight(&self, u: Node, v: Node) -> Option<Weight> {
        if !self.contains_node(v) {
            return None;
        }
        self.nbs.get(u as usize)?.weight_to(v)
    }
}

impl<Nbs: Neighborhood> LabelledVertices for Graph<Nbs> {
    fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.label_of(u)
    }

    fn index_of_label(&self, label: &str) -> Option<Node> {
        self.labels.index_of_label(label)
    }

    fn id_of(&self, u: Node) -> Option<VertexId> {
        self.labels.id_of(u)
    }

    fn index_of_id(&self, id: VertexId) -> Option<Node> {
        self.labels.index_of_id(id)
    }
}

impl<Nbs: Neighborhood> GraphNew for Graph<Nbs> {
    fn new(directed: bool, weighted: bool) -> Self {
        Self {
            nbs: Vec::new(),
            labels: VertexLabels::new(),
            num_edges: 0,
            directed,
            weighted,
        }
    }

    fn with_vertices(n: NumNodes, directed: bool, weighted: bool) -> Self {
        let mut labels = VertexLabels::new();
        for u in 0..n {
            // fresh store with distinct labels
            let _ = labels.insert(u.to_string());
        }

        Self {
            nbs: vec![Nbs::new(n); n as usize],
            labels,
            num_edges: 0,
            directed,
            weighted,
        }
    }
}

impl<Nbs: Neighborhood> GraphVertexEditing for Graph<Nbs> {
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> Result<Node> {
        let u = self.labels.insert(label.into())?;
        for nbs in &mut self.nbs {
            nbs.grow();
        }
        self.nbs.push(Nbs::new(u + 1));
        Ok(u)
    }

    fn remove_vertex(&mut self, u: Node) -> Result<String> {
        self.check_node(u)?;

        let removed = self.nbs.remove(u as usize);
        let mut num_removed = removed.num_of_neighbors() as NumEdges;

        for nbs in &mut self.nbs {
            // In undirected graphs, incoming edges are mirrors of the already counted ones
            if nbs.remove_node(u) && self.directed {
                num_removed += 1;
            }
        }

        self.num_edges -= num_removed;
        Ok(self.labels.remove(u))
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Graph<Nbs> {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        let weight = self.stored_weight(weight)?;

        let prev = self.nbs[u as usize].set_neighbor(v, weight);
        if !self.directed && u != v {
            let mirror = self.nbs[v as usize].set_neighbor(u, weight);
            debug_assert_eq!(prev.is_some(), mirror.is_some());
        }

        if prev.is_none() {
            self.num_edges += 1;
        }
        Ok(prev.is_none())
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if self.nbs[u as usize].try_remove_neighbor(v).is_none() {
            return Ok(false);
        }

        if !self.directed && u != v {
            let mirror = self.nbs[v as usize].try_remove_neighbor(u);
            debug_assert!(mirror.is_some());
        }

        self.num_edges -= 1;
        Ok(true)
    }
}

crate::testing::test_graph_ops!(test_adj_list, AdjList);
crate::testing::test_graph_ops!(test_adj_matrix, AdjMatrix);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn unweighted_graph_stores_unit_weights() {
        let mut graph = AdjList::with_vertices(2, false, false);
        assert!(graph.insert_edge(0, 1, 5.0).unwrap());
        assert_eq!(graph.weight(1, 0), 1.0);
        assert!(!graph.is_weighted());
    }

    #[test]
    fn removals_return_label() {
        let mut graph = AdjMatrix::with_vertices(4, false, true);
        graph.insert_edge(1, 3, 2.0).unwrap();
        let id = graph.id_of(3).unwrap();

        assert_eq!(graph.remove_vertex(0).unwrap(), "0");
        assert_eq!(graph.remove_vertex_by_label("2").unwrap(), "2");
        assert_eq!(graph.index_of_id(id), Some(1));
        assert!(graph.has_edge(0, 1));

        assert_eq!(graph.remove_vertex_by_id(id).unwrap(), "3");
        assert_eq!(graph.labels().collect_vec(), vec!["1"]);
        assert!(graph.is_singleton_graph());

        assert!(matches!(
            graph.remove_vertex_by_id(id),
            Err(GraphError::UnknownVertex(_))
        ));
        assert!(matches!(
            graph.remove_vertex_by_label("2"),
            Err(GraphError::UnknownVertex(_))
        ));
    }

    #[test]
    fn invalid_weight() {
        let mut graph = AdjMatrix::with_vertices(2, true, true);
        assert!(matches!(
            graph.insert_edge(0, 1, Weight::NAN),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = AdjList::with_vertices(3, false, true);
        graph.insert_edge(1, 1, 2.0).unwrap();
        graph.insert_edge(0, 1, 1.0).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(1), 2);

        graph.remove_vertex(1).unwrap();
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.labels().collect_vec(), vec!["0", "2"]);
    }

    #[test]
    fn directed_remove_vertex_counts_in_edges() {
        let mut graph =
            AdjMatrix::from_edges(4, true, false, [(0, 1), (1, 2), (2, 1), (3, 1), (3, 0)])
                .unwrap();
        assert_eq!(graph.in_degree_of(1), 3);

        graph.remove_vertex(1).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(
            graph.ordered_edges().iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(2, 0)]
        );
    }
}
