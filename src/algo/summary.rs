use std::fmt::Display;

use super::*;

/// Size, flags and simple global properties of a graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphSummary {
    /// Number of vertices
    pub number_of_nodes: NumNodes,
    /// Number of edges (undirected edges counted once)
    pub number_of_edges: NumEdges,
    /// Edges are oriented
    pub directed: bool,
    /// Edge weights are meaningful
    pub weighted: bool,
    /// Fraction of possible edges (ignoring self-loops) that are present
    pub density: f64,
    /// The underlying undirected graph is connected
    pub connected: bool,
}

impl Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} m={} {} {} density={:.4} {}",
            self.number_of_nodes,
            self.number_of_edges,
            if self.directed { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" },
            self.density,
            if self.connected { "connected" } else { "disconnected" },
        )
    }
}

/// Global properties available on every graph
pub trait Summary: AdjacencyList + GraphEdgeOrder + Sized {
    /// Returns `m / (n (n-1))` for directed and `m / (n (n-1) / 2)` for undirected graphs,
    /// and `0` if `n <= 1`
    fn density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let possible = if self.is_directed() {
            n * (n - 1.0)
        } else {
            n * (n - 1.0) / 2.0
        };
        self.number_of_edges() as f64 / possible
    }

    /// Returns *true* if the underlying undirected graph is connected (weak connectivity).
    /// The empty graph is connected.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        if self.is_directed() {
            let view = UnderlyingGraph::of(self);
            view.bfs(0).count() == view.len()
        } else {
            self.bfs(0).count() == self.len()
        }
    }

    /// Collects the summary
    fn summary(&self) -> GraphSummary {
        GraphSummary {
            number_of_nodes: self.number_of_nodes(),
            number_of_edges: self.number_of_edges(),
            directed: self.is_directed(),
            weighted: self.is_weighted(),
            density: self.density(),
            connected: self.is_connected(),
        }
    }
}

impl<G> Summary for G where G: AdjacencyList + GraphEdgeOrder + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::fixtures::five_vertices;

    #[test]
    fn five_vertices_summary() {
        let graph: MirroredGraph = five_vertices();
        let summary = graph.summary();

        assert_eq!(
            summary,
            GraphSummary {
                number_of_nodes: 5,
                number_of_edges: 5,
                directed: false,
                weighted: true,
                density: 0.5,
                connected: true,
            }
        );
        assert_eq!(
            summary.to_string(),
            "n=5 m=5 undirected weighted density=0.5000 connected"
        );
    }

    #[test]
    fn weak_connectivity() {
        let mut graph = AdjList::from_edges(3, true, false, [(1, 0), (2, 1)]).unwrap();
        assert!(graph.is_connected());
        assert_eq!(graph.density(), 2.0 / 6.0);

        graph.insert_vertex("isolated").unwrap();
        assert!(!graph.is_connected());

        assert!(AdjMatrix::new(false, false).is_connected());
        assert_eq!(AdjMatrix::with_vertices(1, false, false).density(), 0.0);
    }
}
