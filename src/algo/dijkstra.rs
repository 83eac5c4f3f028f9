use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    time::{Duration, Instant},
};

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::*;

/// Single-source shortest paths for non-negative edge weights.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = AdjList::from_edges(3, true, true, [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0)]).unwrap();
/// let paths = Dijkstra::new(0).run(&g).unwrap();
///
/// assert_eq!(paths.distance_to(1), Some(3.0));
/// assert_eq!(paths.path_to(1), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    source: Node,
}

/// Distances and predecessor links computed by [`Dijkstra`]
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Source of the search
    pub source: Node,
    /// `distances[v]` is the length of a shortest path to `v` or `Weight::INFINITY`
    pub distances: Vec<Weight>,
    /// `predecessors[v]` is the node before `v` on a shortest path; `None` for the source
    /// and for unreachable nodes
    pub predecessors: Vec<Option<Node>>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl Dijkstra {
    /// Configures a search from `source`
    pub fn new(source: Node) -> Self {
        Self { source }
    }

    /// Sets the source of the search
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Runs the search on `graph`
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if the source is out of range and
    /// `GraphError::NegativeWeight` if a reachable edge has a negative weight.
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Result<ShortestPaths> {
        let start = Instant::now();
        let source = self.source;
        graph.check_node(source)?;

        if !graph.is_weighted() {
            warn!("running dijkstra on an unweighted graph, every edge has weight 1");
        }

        let n = graph.len();
        let mut distances = vec![Weight::INFINITY; n];
        let mut predecessors: Vec<Option<Node>> = vec![None; n];
        let mut visited = bitvec![0; n];
        let mut heap = BinaryHeap::new();

        distances[source as usize] = 0.0;
        // non-negative floats order like their bit patterns
        heap.push(Reverse((0.0f64.to_bits(), source)));

        while let Some(Reverse((_, u))) = heap.pop() {
            if visited.replace(u as usize, true) {
                continue;
            }

            let du = distances[u as usize];
            for (v, weight) in graph.neighbors_of(u) {
                if weight < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        origin: u,
                        destination: v,
                        weight,
                    });
                }

                let candidate = du + weight;
                if candidate < distances[v as usize] {
                    distances[v as usize] = candidate;
                    predecessors[v as usize] = Some(u);
                    heap.push(Reverse((candidate.to_bits(), v)));
                }
            }
        }

        let elapsed = start.elapsed();
        debug!(
            source,
            reached = visited.count_ones(),
            ?elapsed,
            "dijkstra finished"
        );

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
            elapsed,
        })
    }
}

impl ShortestPaths {
    /// Returns the distance to `v` if `v` is reachable
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.distances
            .get(v as usize)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Returns *true* if `v` is reachable from the source
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_some()
    }

    /// Returns a shortest path `source, ..., target` or an empty path if `target` is unreachable
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        reconstruct_path(self.source, &self.predecessors, target)
    }
}

/// Walks the predecessor links backwards from `target` and returns the path `source, ..., target`.
///
/// Returns an empty path if `target` is out of range or the chain of predecessors does not end
/// in `source` within `predecessors.len()` steps.
pub fn reconstruct_path(source: Node, predecessors: &[Option<Node>], target: Node) -> Vec<Node> {
    if target as usize >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        if path.len() > predecessors.len() {
            return Vec::new();
        }

        match predecessors.get(current as usize).copied().flatten() {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Shortest paths on every graph
pub trait ShortestPathSearch: AdjacencyList + Sized {
    /// Runs [`Dijkstra`] from `source`
    ///
    /// # Errors
    /// See [`Dijkstra::run`].
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        Dijkstra::new(source).run(self)
    }
}

impl<G> ShortestPathSearch for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::fixtures::five_vertices;

    #[test]
    fn five_vertex_scenario() {
        let graph: AdjMatrix = five_vertices();
        let paths = graph.dijkstra(0).unwrap();

        assert_eq!(paths.distances, vec![0.0, 3.0, 5.0, 5.0, 6.0]);
        assert_eq!(paths.predecessors, vec![None, Some(0), Some(0), Some(1), Some(2)]);
        assert_eq!(paths.path_to(3), vec![0, 1, 3]);
        assert_eq!(paths.path_to(4), vec![0, 2, 4]);
        assert_eq!(paths.path_to(0), vec![0]);
    }

    #[test]
    fn unreachable_nodes() {
        let graph = AdjList::from_edges(4, true, true, [(0, 1, 2.0), (2, 0, 1.0)]).unwrap();
        let paths = Dijkstra::new(0).run(&graph).unwrap();

        assert_eq!(paths.distance_to(1), Some(2.0));
        assert!(!paths.is_reachable(2));
        assert_eq!(paths.distances[3], Weight::INFINITY);
        assert_eq!(paths.predecessors[2], None);
        assert!(paths.path_to(2).is_empty());
        assert!(paths.path_to(17).is_empty());
    }

    #[test]
    fn unweighted_counts_hops() {
        let graph = AdjList::from_edges(4, false, false, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let paths = graph.dijkstra(1).unwrap();
        assert_eq!(paths.distances, vec![1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn errors() {
        let graph = AdjList::from_edges(3, true, true, [(0, 1, 1.0), (1, 2, -1.0)]).unwrap();
        assert!(matches!(
            graph.dijkstra(3),
            Err(GraphError::InvalidIndex { index: 3, .. })
        ));
        assert!(matches!(
            graph.dijkstra(0),
            Err(GraphError::NegativeWeight {
                origin: 1,
                destination: 2,
                ..
            })
        ));
        // the negative edge is not reachable from 2
        assert!(graph.dijkstra(2).is_ok());
    }

    #[test]
    fn corrupted_predecessors() {
        let cyclic = vec![None, Some(2), Some(1)];
        assert!(reconstruct_path(0, &cyclic, 1).is_empty());
        assert_eq!(reconstruct_path(0, &[None, Some(0)], 1), vec![0, 1]);
    }

    #[test]
    fn predecessors_are_tight() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for _ in 0..30 {
            let directed = rng.random_bool(0.5);
            let graph: AdjList = crate::gens::RandomGraph::gnm(rng, 40, 100, directed, true, 20)
                .unwrap();
            let paths = graph.dijkstra(0).unwrap();

            for v in graph.vertices() {
                match paths.predecessors[v as usize] {
                    Some(p) => assert_eq!(
                        paths.distances[v as usize],
                        paths.distances[p as usize] + graph.weight(p, v)
                    ),
                    None => assert!(v == 0 || !paths.is_reachable(v)),
                }
            }

            // no edge can be relaxed any further
            for e in graph.edges().collect_vec() {
                let (u, v) = (e.origin as usize, e.destination as usize);
                assert!(paths.distances[v] <= paths.distances[u] + e.weight);
                if !directed {
                    assert!(paths.distances[u] <= paths.distances[v] + e.weight);
                }
            }
        }
    }
}
