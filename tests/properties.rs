//! Property-based tests for the graph store and the algorithm suite.
//!
//! Uses proptest to verify invariants across randomly generated graphs.

use fxhash::FxHashSet;
use proptest::prelude::*;
use wgraphs::{algo::*, prelude::*};

// -----------------------------------------------------------------------------
// Strategies
// -----------------------------------------------------------------------------

/// Strategy for a random weighted edge list on `1..=max_n` vertices
fn graph_strategy(max_n: NumNodes) -> impl Strategy<Value = (NumNodes, Vec<WeightedEdge>)> {
    (1..=max_n).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u32..20)
            .prop_map(|(u, v, w)| WeightedEdge::new(u, v, w as Weight));
        (Just(n), proptest::collection::vec(edge, 0..(3 * n as usize)))
    })
}

/// Mutations applied to a [`MirroredGraph`]
#[derive(Debug, Clone)]
enum GraphOp {
    InsertEdge(Node, Node, u32),
    RemoveEdge(Node, Node),
    InsertVertex,
    RemoveVertex(Node),
}

fn graph_op_strategy() -> impl Strategy<Value = GraphOp> {
    prop_oneof![
        4 => (0u32..12, 0u32..12, 1u32..9).prop_map(|(u, v, w)| GraphOp::InsertEdge(u, v, w)),
        2 => (0u32..12, 0u32..12).prop_map(|(u, v)| GraphOp::RemoveEdge(u, v)),
        1 => Just(GraphOp::InsertVertex),
        1 => (0u32..12).prop_map(GraphOp::RemoveVertex),
    ]
}

/// Vertices reachable from `start`, computed independently of the traversal module
fn reachable_set<G: AdjacencyList>(graph: &G, start: Node) -> FxHashSet<Node> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        if seen.insert(u) {
            stack.extend(graph.neighbor_nodes_of(u));
        }
    }
    seen
}

// -----------------------------------------------------------------------------
// Graph Store
// -----------------------------------------------------------------------------

proptest! {
    /// List and matrix views agree on every pair after arbitrary mutations.
    #[test]
    fn mirrored_views_agree(
        directed in any::<bool>(),
        ops in proptest::collection::vec(graph_op_strategy(), 0..60),
    ) {
        let mut graph = MirroredGraph::with_vertices(8, directed, true);
        let mut next_label = 100;

        for op in ops {
            match op {
                GraphOp::InsertEdge(u, v, w) => { let _ = graph.insert_edge(u, v, w as Weight); }
                GraphOp::RemoveEdge(u, v) => { let _ = graph.remove_edge(u, v); }
                GraphOp::InsertVertex => {
                    prop_assert!(graph.insert_vertex(next_label.to_string()).is_ok());
                    next_label += 1;
                }
                GraphOp::RemoveVertex(u) => { let _ = graph.remove_vertex(u); }
            }

            prop_assert!(graph.is_consistent());
            for u in graph.vertices() {
                for v in graph.vertices() {
                    prop_assert_eq!(graph.list().try_weight(u, v), graph.matrix().try_weight(u, v));
                }
            }
        }
    }

    /// Undirected insertions and removals are symmetric.
    #[test]
    fn undirected_symmetry((n, edges) in graph_strategy(10), remove in any::<bool>()) {
        let mut graph = AdjList::with_vertices(n, false, true);

        for e in edges {
            graph.insert_edge(e.origin, e.destination, e.weight).unwrap();
            prop_assert!(graph.has_edge(e.destination, e.origin));
            prop_assert_eq!(graph.weight(e.destination, e.origin), e.weight);

            if remove {
                prop_assert!(graph.remove_edge(e.origin, e.destination).unwrap());
                prop_assert!(!graph.has_edge(e.destination, e.origin));
            }
        }
    }

    /// Removing a vertex shifts all larger indices down while labels and edges follow.
    #[test]
    fn remove_vertex_reindexes((n, edges) in graph_strategy(10), victim in 0u32..10, directed in any::<bool>()) {
        prop_assume!(victim < n);
        let before = AdjMatrix::from_edges(n, directed, true, edges).unwrap();
        let mut after = before.clone();

        prop_assert_eq!(after.remove_vertex(victim).unwrap(), victim.to_string());
        prop_assert_eq!(after.number_of_nodes(), n - 1);

        let shift = |u: Node| if u > victim { u - 1 } else { u };
        for u in before.vertices().filter(|&u| u != victim) {
            prop_assert_eq!(after.label_of(shift(u)), before.label_of(u));
            prop_assert_eq!(after.id_of(shift(u)), before.id_of(u));
            for v in before.vertices().filter(|&v| v != victim) {
                prop_assert_eq!(after.try_weight(shift(u), shift(v)), before.try_weight(u, v));
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Algorithms
// -----------------------------------------------------------------------------

proptest! {
    /// BFS and DFS orders are duplicate-free permutations of the reachable set.
    #[test]
    fn traversal_visits_reachable_set((n, edges) in graph_strategy(15), start in 0u32..15, directed in any::<bool>()) {
        prop_assume!(start < n);
        let graph = AdjList::from_edges(n, directed, false, edges).unwrap();
        let reachable = reachable_set(&graph, start);

        for order in [graph.bfs_order(start, None).unwrap(), graph.dfs_order(start, None).unwrap()] {
            prop_assert_eq!(order[0], start);
            prop_assert!(order.len() <= graph.len());
            prop_assert_eq!(order.len(), reachable.len());
            prop_assert_eq!(order.iter().copied().collect::<FxHashSet<_>>(), reachable.clone());
        }
    }

    /// Every predecessor link of Dijkstra is tight and unreachable vertices stay at infinity.
    #[test]
    fn dijkstra_is_tight((n, edges) in graph_strategy(15), source in 0u32..15, directed in any::<bool>()) {
        prop_assume!(source < n);
        let graph = AdjMatrix::from_edges(n, directed, true, edges).unwrap();
        let paths = graph.dijkstra(source).unwrap();
        let reachable = reachable_set(&graph, source);

        prop_assert_eq!(paths.distances[source as usize], 0.0);
        prop_assert_eq!(paths.predecessors[source as usize], None);

        for v in graph.vertices() {
            let d = paths.distances[v as usize];
            if !reachable.contains(&v) {
                prop_assert!(d.is_infinite());
                prop_assert_eq!(paths.predecessors[v as usize], None);
                prop_assert!(paths.path_to(v).is_empty());
            } else if v != source {
                let p = paths.predecessors[v as usize].unwrap();
                prop_assert_eq!(d, paths.distances[p as usize] + graph.weight(p, v));
                for (w, weight) in graph.neighbors_of(v) {
                    prop_assert!(paths.distances[w as usize] <= d + weight);
                }

                let path = paths.path_to(v);
                prop_assert_eq!(path.first().copied(), Some(source));
                prop_assert_eq!(path.last().copied(), Some(v));
            }
        }
    }

    /// Kruskal and Prim agree on the total weight of connected graphs and return `n-1` edges.
    #[test]
    fn spanning_trees_agree((n, edges) in graph_strategy(15)) {
        let mut graph = AdjList::from_edges(n, false, true, edges).unwrap();
        for u in 1..n {
            graph.insert_edge(u - 1, u, 50.0).unwrap();
        }

        let kruskal = graph.kruskal();
        let prim = graph.prim(0).unwrap();

        prop_assert_eq!(kruskal.number_of_edges(), n - 1);
        prop_assert_eq!(prim.number_of_edges(), n - 1);
        prop_assert!(kruskal.is_spanning_tree(n));
        prop_assert!(prim.is_spanning_tree(n));
        prop_assert!((kruskal.total_weight - prim.total_weight).abs() < 1e-9);
    }

    /// All colorings are proper and the brute force never uses more colors than a heuristic.
    #[test]
    fn colorings_are_valid((n, edges) in graph_strategy(7), directed in any::<bool>()) {
        let graph = AdjList::from_edges(n, directed, false, edges).unwrap();

        let exact = graph.color_with(ColoringStrategy::BruteForce).unwrap();
        prop_assert!(exact.is_valid_for(&graph));

        for strategy in [ColoringStrategy::WelshPowell, ColoringStrategy::Dsatur, ColoringStrategy::Greedy] {
            let coloring = graph.color_with(strategy).unwrap();
            prop_assert!(coloring.is_valid_for(&graph));
            prop_assert!(exact.num_colors <= coloring.num_colors, "{} beat brute force", strategy);
        }
    }
}
