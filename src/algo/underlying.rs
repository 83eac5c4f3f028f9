use super::*;

/// The underlying undirected simple graph of any [`AdjacencyList`].
///
/// For directed graphs, every arc is also available in reverse. Self-loops and parallel
/// arcs are dropped and every neighborhood is sorted. All edges have weight [`DEFAULT_WEIGHT`].
/// Coloring and weak connectivity are defined on this view.
#[derive(Debug, Clone)]
pub struct UnderlyingGraph {
    adj: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl UnderlyingGraph {
    /// Builds the view of `graph`
    pub fn of<G: AdjacencyList>(graph: &G) -> Self {
        let adj = graph.undirected_adjacency();
        let num_edges = (adj.iter().map(Vec::len).sum::<usize>() / 2) as NumEdges;
        Self { adj, num_edges }
    }

    /// Returns the sorted neighbors of `u` as a slice
    /// ** Panics if `u >= n` **
    pub fn neighbors(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }
}

impl GraphType for UnderlyingGraph {
    fn is_directed(&self) -> bool {
        false
    }

    fn is_weighted(&self) -> bool {
        false
    }
}

impl GraphNodeOrder for UnderlyingGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for UnderlyingGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for UnderlyingGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[u as usize].iter().map(|&v| (v, DEFAULT_WEIGHT))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn symmetrises_arcs() {
        let graph =
            AdjList::from_edges(4, true, false, [(0, 1), (1, 0), (2, 1), (3, 3)]).unwrap();
        let view = UnderlyingGraph::of(&graph);

        assert_eq!(view.number_of_edges(), 2);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.neighbor_nodes_of(2).collect_vec(), vec![1]);
        assert_eq!(view.degree_of(3), 0);
        assert!(view.is_undirected());
    }
}
