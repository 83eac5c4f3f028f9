/*!
Graph traversal algorithms.

This module provides:
- A generic lazy traversal iterator ([`TraversalSearch`]) parameterized by its frontier:
  a queue yields **BFS** order, a stack yields **DFS** order.
- [`NeighborOrder`] to expand neighbors either in the natural order of the representation
  or in ascending index order (deterministic across representations).
- A high-level [`Traversal`] trait that exposes traversals directly as methods on graphs,
  including the checked `bfs_order` / `dfs_order` entry points.

DFS is iterative: neighbors are pushed in reverse and vertices are marked when popped,
which reproduces the preorder of a recursive DFS without its recursion depth.
*/

use std::collections::VecDeque;

use bitvec::prelude::*;
use smallvec::SmallVec;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// *true* if nodes are marked visited when pushed, *false* if marked when popped.
    /// Stack-based sequencers must mark on pop to reproduce depth-first preorder.
    const MARK_ON_PUSH: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Drops all nodes in the frontier.
    fn clear(&mut self);
}

impl NodeSequencer for VecDeque<Node> {
    const MARK_ON_PUSH: bool = true;

    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl NodeSequencer for Vec<Node> {
    const MARK_ON_PUSH: bool = false;

    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// Order in which the neighbors of a visited node are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// The order reported by [`AdjacencyList::neighbors_of`]
    /// (insertion order for lists, index order for matrices)
    #[default]
    Natural,
    /// Increasing node index, independent of the representation
    Ascending,
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a bitset of
/// visited nodes. Every reachable node is yielded exactly once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: BitVec,
    sequencer: S,
    order: NeighborOrder,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first (pre-)order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = loop {
            let u = self.sequencer.pop()?;
            if S::MARK_ON_PUSH {
                break u;
            }
            // a node may sit on the stack several times; only its first pop counts
            if !self.visited.replace(u as usize, true) {
                break u;
            }
        };

        if self.stop_at == Some(u) {
            self.sequencer.clear();
            return Some(u);
        }

        let mut candidates: SmallVec<[Node; 16]> = self
            .graph
            .neighbor_nodes_of(u)
            .filter(|&v| !self.visited[v as usize])
            .collect();

        if self.order == NeighborOrder::Ascending {
            candidates.sort_unstable();
        }
        if !S::MARK_ON_PUSH {
            candidates.reverse();
        }

        for v in candidates {
            if S::MARK_ON_PUSH {
                self.visited.set(v as usize, true);
            }
            self.sequencer.push(v);
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.graph.len() - self.visited.count_ones();
        if S::MARK_ON_PUSH {
            (self.sequencer.cardinality(), Some(self.sequencer.cardinality() + unvisited))
        } else {
            (0, Some(unvisited))
        }
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// - `graph`: The graph to traverse.
    /// - `start`: The starting node.
    ///
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = bitvec![0; graph.len()];
        if S::MARK_ON_PUSH {
            visited.set(start as usize, true);
        } else {
            assert!(graph.contains_node(start));
        }

        Self {
            graph,
            visited,
            sequencer: S::init(start),
            order: NeighborOrder::Natural,
            stop_at: None,
        }
    }

    /// Sets the order in which neighbors are expanded.
    pub fn set_order(&mut self, order: NeighborOrder) {
        self.order = order;
    }

    /// Sets the order in which neighbors are expanded.
    pub fn order(mut self, order: NeighborOrder) -> Self {
        self.set_order(order);
        self
    }

    /// Expands neighbors in ascending index order.
    pub fn ascending(self) -> Self {
        self.order(NeighborOrder::Ascending)
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Returns *true* if `u` has been visited (or, for BFS, discovered) so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        match self.visited.first_zero() {
            None => false,
            Some(x) => {
                if S::MARK_ON_PUSH {
                    self.visited.set(x, true);
                }
                self.sequencer.push(x as Node);
                true
            }
        }
    }
}

/// Traversals available on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, false, false, [(0, 2), (0, 1)]).unwrap();
    ///
    /// assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 2, 1]);
    /// assert_eq!(g.bfs(0).ascending().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, false, false, [(0, 1), (1, 2), (0, 3)]).unwrap();
    ///
    /// assert_eq!(g.dfs(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns the BFS visitation order from `start`.
    /// If `target` is given and reached, the order is truncated right after it.
    /// An unreachable target yields the full reachable order.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `start >= n`.
    fn bfs_order(&self, start: Node, target: Option<Node>) -> Result<Vec<Node>> {
        self.bfs_order_with(start, target, NeighborOrder::Natural)
    }

    /// Same as [`Traversal::bfs_order`] with an explicit expansion order
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `start >= n`.
    fn bfs_order_with(
        &self,
        start: Node,
        target: Option<Node>,
        order: NeighborOrder,
    ) -> Result<Vec<Node>> {
        self.check_node(start)?;
        let mut search = self.bfs(start).order(order);
        if let Some(target) = target {
            search.set_stop_at(target);
        }
        Ok(search.collect())
    }

    /// Returns the DFS visitation order from `start`.
    /// If `target` is given and reached, the order is truncated right after it.
    /// An unreachable target yields the full reachable order.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `start >= n`.
    fn dfs_order(&self, start: Node, target: Option<Node>) -> Result<Vec<Node>> {
        self.dfs_order_with(start, target, NeighborOrder::Natural)
    }

    /// Same as [`Traversal::dfs_order`] with an explicit expansion order
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `start >= n`.
    fn dfs_order_with(
        &self,
        start: Node,
        target: Option<Node>,
        order: NeighborOrder,
    ) -> Result<Vec<Node>> {
        self.check_node(start)?;
        let mut search = self.dfs(start).order(order);
        if let Some(target) = target {
            search.set_stop_at(target);
        }
        Ok(search.collect())
    }

    /// Returns *true* if `v` can be reached from `u` along (directed) edges
    ///
    /// # Errors
    /// Returns `GraphError::InvalidIndex` if `u >= n || v >= n`.
    fn is_reachable(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.bfs(u).any(|w| w == v))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    fn recursive_dfs<G: AdjacencyList>(graph: &G, u: Node, visited: &mut Vec<bool>, order: &mut Vec<Node>) {
        visited[u as usize] = true;
        order.push(u);
        for v in graph.neighbor_nodes_of(u) {
            if !visited[v as usize] {
                recursive_dfs(graph, v, visited, order);
            }
        }
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            AdjMatrix::from_edges(6, false, false, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
                .unwrap();

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);
        }

        {
            let list = AdjList::from_edges(
                6,
                false,
                false,
                [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
            )
            .unwrap();
            assert_eq!(list.bfs(1).collect_vec(), vec![1, 2, 0, 4, 5, 3]);
            assert_eq!(list.bfs(1).ascending().collect_vec(), vec![1, 0, 2, 5, 4, 3]);
        }

        {
            let directed = AdjList::from_edges(6, true, false, [(5, 4), (4, 3), (3, 5), (0, 5)])
                .unwrap();
            assert_eq!(BFS::new(&directed, 5).collect_vec(), [5, 4, 3]);
        }
    }

    #[test]
    fn test_stopper() {
        let graph = AdjMatrix::from_edges(4, false, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
        assert_eq!(graph.dfs(0).stop_at(0).collect_vec(), vec![0]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            AdjList::from_edges(6, false, false, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();

        assert_eq!(graph.dfs(1).collect_vec(), vec![1, 2, 0, 5, 4, 3]);
        assert_eq!(graph.dfs(1).ascending().collect_vec(), vec![1, 0, 5, 4, 3, 2]);
        assert_eq!(graph.dfs(5).stop_at(3).collect_vec(), vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn dfs_matches_recursive_preorder() {
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for directed in [false, true] {
            for _ in 0..20 {
                let graph: AdjList = crate::gens::RandomGraph::gnm(rng, 30, 60, directed, false, 1)
                    .unwrap();
                for start in [0, 7, 29] {
                    let mut visited = vec![false; 30];
                    let mut expected = Vec::new();
                    recursive_dfs(&graph, start, &mut visited, &mut expected);
                    assert_eq!(graph.dfs(start).collect_vec(), expected);
                }
            }
        }
    }

    #[test]
    fn checked_orders() {
        let graph = AdjList::from_edges(5, false, true, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)])
            .unwrap();

        assert_eq!(graph.bfs_order(0, None).unwrap(), vec![0, 1, 2]);
        // unreachable target: full reachable set
        assert_eq!(graph.dfs_order(0, Some(4)).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            graph
                .bfs_order_with(3, Some(4), NeighborOrder::Ascending)
                .unwrap(),
            vec![3, 4]
        );
        assert!(matches!(
            graph.bfs_order(5, None),
            Err(GraphError::InvalidIndex { index: 5, len: 5 })
        ));
        assert!(graph.dfs_order(9, None).is_err());

        assert!(graph.is_reachable(2, 0).unwrap());
        assert!(!graph.is_reachable(2, 3).unwrap());
    }

    #[test]
    fn target_prefix_is_visitation_order() {
        // 0 has children 1 and 2; the prefix up to 2 contains 1 although 1 is not on the path
        let graph = AdjList::from_edges(3, false, false, [(0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.bfs_order(0, Some(2)).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            graph
                .dfs_order_with(0, Some(2), NeighborOrder::Ascending)
                .unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn restart() {
        let graph = AdjList::from_edges(4, false, false, [(0, 1), (2, 3)]).unwrap();
        let mut search = graph.bfs(0);
        assert_eq!(search.by_ref().collect_vec(), vec![0, 1]);
        assert!(search.try_restart_at_unvisited());
        assert_eq!(search.by_ref().collect_vec(), vec![2, 3]);
        assert!(!search.try_restart_at_unvisited());
    }
}
