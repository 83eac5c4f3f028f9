/*!
Minimum spanning trees and forests.

Both algorithms work on the underlying undirected graph: every pair `{u, v}` is considered
once with the weight of its first occurrence in [`AdjacencyList::edges`] order, self-loops
are ignored. On disconnected graphs, [`Kruskal`] returns a minimum spanning forest while
[`Prim`] only spans the component of its start vertex.
*/

use std::time::{Duration, Instant};

use bitvec::prelude::*;
use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Edges of a spanning tree or forest
#[derive(Debug, Clone)]
pub struct SpanningForest {
    /// Accepted edges in the order they were selected
    pub edges: Vec<WeightedEdge>,
    /// Sum of the weights of all accepted edges
    pub total_weight: Weight,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl SpanningForest {
    /// Returns the number of accepted edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns *true* if the edges span all `n` nodes, i.e. if there are exactly `n - 1` of them
    pub fn is_spanning_tree(&self, n: NumNodes) -> bool {
        self.edges.len() + 1 == n as usize || (n == 0 && self.edges.is_empty())
    }
}

/// Returns every unordered pair `{u, v}` with `u != v` once, normalized to `u < v`,
/// carrying the weight of its first occurrence
fn canonical_edges<G: AdjacencyList>(graph: &G) -> Vec<WeightedEdge> {
    let mut seen = FxHashSet::default();
    graph
        .edges()
        .filter(|e| !e.edge().is_loop())
        .map(|e| e.normalized())
        .filter(|e| seen.insert(e.edge()))
        .collect_vec()
}

/// Kruskal's algorithm with a [`UnionFind`] to reject cycle-forming edges.
///
/// Edges are stable-sorted by weight, so ties are resolved by the order of [`AdjacencyList::edges`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Creates the algorithm
    pub fn new() -> Self {
        Self
    }

    /// Computes a minimum spanning forest of `graph`
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> SpanningForest {
        let start = Instant::now();
        let n = graph.number_of_nodes();

        let mut candidates = canonical_edges(graph);
        candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut uf = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1) as usize);
        let mut total_weight = 0.0;

        for e in candidates {
            if edges.len() + 1 >= n as usize {
                break;
            }
            if uf.union(e.origin, e.destination) {
                total_weight += e.weight;
                edges.push(e);
            }
        }

        let elapsed = start.elapsed();
        debug!(
            accepted = edges.len(),
            total_weight,
            ?elapsed,
            "kruskal finished"
        );

        SpanningForest {
            edges,
            total_weight,
            elapsed,
        }
    }
}

/// Prim's algorithm with a linear scan for the cheapest vertex to attach next
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    start: Node,
}

impl Prim {
    /// Creates the algorithm starting at vertex `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start vertex
    pub fn start(mut self, start: Node) -> Self {
        self.start = start;
        self
    }

    /// Computes a minimum spanning tree of the component of the start vertex
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if the start vertex is out of range of a non-empty graph.
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Result<SpanningForest> {
        let start = Instant::now();
        let n = graph.len();
        if n == 0 {
            return Ok(SpanningForest {
                edges: Vec::new(),
                total_weight: 0.0,
                elapsed: start.elapsed(),
            });
        }
        graph.check_node(self.start)?;

        let mut adj: Vec<Vec<(Node, Weight)>> = vec![Vec::new(); n];
        for e in canonical_edges(graph) {
            adj[e.origin as usize].push((e.destination, e.weight));
            adj[e.destination as usize].push((e.origin, e.weight));
        }

        let mut visited = bitvec![0; n];
        let mut min_weight = vec![Weight::INFINITY; n];
        let mut parent: Vec<Option<Node>> = vec![None; n];
        min_weight[self.start as usize] = 0.0;

        let mut edges = Vec::with_capacity(n - 1);
        let mut total_weight = 0.0;

        for _ in 0..n {
            let Some(u) = visited
                .iter_zeros()
                .min_by(|&a, &b| min_weight[a].total_cmp(&min_weight[b]))
            else {
                break;
            };

            // everything left is unreachable from the start vertex
            if min_weight[u] == Weight::INFINITY {
                break;
            }

            visited.set(u, true);
            if let Some(p) = parent[u] {
                edges.push(WeightedEdge::new(p, u as Node, min_weight[u]));
                total_weight += min_weight[u];
            }

            for &(v, w) in &adj[u] {
                if !visited[v as usize] && w < min_weight[v as usize] {
                    min_weight[v as usize] = w;
                    parent[v as usize] = Some(u as Node);
                }
            }
        }

        let elapsed = start.elapsed();
        debug!(
            start = self.start,
            accepted = edges.len(),
            total_weight,
            ?elapsed,
            "prim finished"
        );

        Ok(SpanningForest {
            edges,
            total_weight,
            elapsed,
        })
    }
}

/// Spanning trees on every graph
pub trait MinimumSpanningTree: AdjacencyList + Sized {
    /// Runs [`Kruskal`]
    fn kruskal(&self) -> SpanningForest {
        Kruskal::new().run(self)
    }

    /// Runs [`Prim`] from `start`
    ///
    /// # Errors
    /// See [`Prim::run`].
    fn prim(&self, start: Node) -> Result<SpanningForest> {
        Prim::new().start(start).run(self)
    }
}

impl<G> MinimumSpanningTree for G where G: AdjacencyList + Sized {}
