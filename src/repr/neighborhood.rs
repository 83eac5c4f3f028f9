use std::{iter::Enumerate, slice::Iter};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A graph owns one `Neighborhood` per vertex. Besides edge queries and updates, a
/// neighborhood has to follow the vertex set: [`Neighborhood::grow`] makes room for a
/// newly inserted vertex and [`Neighborhood::remove_node`] drops a removed vertex and
/// shifts all larger indices down by one.
pub trait Neighborhood: Clone {
    /// Creates an empty neighborhood in a graph with `n` vertices
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Iterator over `(neighbor, weight)`
    type NeighborhoodIter<'a>: Iterator<Item = (Node, Weight)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the weight of the edge to `v` if `v` is a neighbor
    fn weight_to(&self, v: Node) -> Option<Weight>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds `v` with weight `weight` or overwrites the weight if `v` is already a neighbor.
    /// Returns the previous weight.
    /// ** Might panic if `v >= n` **
    fn set_neighbor(&mut self, v: Node, weight: Weight) -> Option<Weight>;

    /// Removes `v` from the Neighborhood and returns the weight of the removed edge
    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight>;

    /// Makes room for a vertex appended to the graph
    fn grow(&mut self);

    /// Removes vertex `u` from the index space: drops `u` as a neighbor and decrements
    /// every neighbor larger than `u`. Returns *true* if `u` was a neighbor.
    fn remove_node(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Adjacency list of a single vertex: `(neighbor, weight)` pairs in insertion order
#[derive(Debug, Clone, Default)]
pub struct ListNeighborhood(Vec<(Node, Weight)>);

impl Neighborhood for ListNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Vec::new())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = std::iter::Copied<Iter<'a, (Node, Weight)>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0.iter().find(|&&(u, _)| u == v).map(|&(_, w)| w)
    }

    fn set_neighbor(&mut self, v: Node, weight: Weight) -> Option<Weight> {
        if let Some(entry) = self.0.iter_mut().find(|(u, _)| *u == v) {
            Some(std::mem::replace(&mut entry.1, weight))
        } else {
            self.0.push((v, weight));
            None
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let pos = self.0.iter().position(|&(u, _)| u == v)?;
        // `remove` instead of `swap_remove` to keep the insertion order
        Some(self.0.remove(pos).1)
    }

    fn grow(&mut self) {}

    fn remove_node(&mut self, u: Node) -> bool {
        let before = self.0.len();
        self.0.retain(|&(v, _)| v != u);
        for (v, _) in &mut self.0 {
            if *v > u {
                *v -= 1;
            }
        }
        before != self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear()
    }
}

/// One row of an adjacency matrix: cell `v` holds the weight of the edge to `v`
#[derive(Debug, Clone, Default)]
pub struct MatrixNeighborhood {
    row: Vec<Option<Weight>>,
    degree: NumNodes,
}

/// Iterator over the occupied cells of a [`MatrixNeighborhood`] in ascending index order
pub struct MatrixNeighborIter<'a> {
    cells: Enumerate<Iter<'a, Option<Weight>>>,
}

impl Iterator for MatrixNeighborIter<'_> {
    type Item = (Node, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .by_ref()
            .find_map(|(v, w)| w.map(|w| (v as Node, w)))
    }
}

impl Neighborhood for MatrixNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            row: vec![None; n as usize],
            degree: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.degree
    }

    type NeighborhoodIter<'a>
        = MatrixNeighborIter<'a>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        MatrixNeighborIter {
            cells: self.row.iter().enumerate(),
        }
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.row.get(v as usize).copied().flatten()
    }

    fn set_neighbor(&mut self, v: Node, weight: Weight) -> Option<Weight> {
        let prev = self.row[v as usize].replace(weight);
        if prev.is_none() {
            self.degree += 1;
        }
        prev
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let prev = self.row.get_mut(v as usize)?.take();
        if prev.is_some() {
            self.degree -= 1;
        }
        prev
    }

    fn grow(&mut self) {
        self.row.push(None);
    }

    fn remove_node(&mut self, u: Node) -> bool {
        if (u as usize) >= self.row.len() {
            return false;
        }
        let was_neighbor = self.row.remove(u as usize).is_some();
        if was_neighbor {
            self.degree -= 1;
        }
        was_neighbor
    }

    fn clear(&mut self) {
        self.row.iter_mut().for_each(|cell| *cell = None);
        self.degree = 0;
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn fill<N: Neighborhood>() -> N {
        let mut nbs = N::new(6);
        assert!(nbs.set_neighbor(4, 2.0).is_none());
        assert!(nbs.set_neighbor(1, 3.0).is_none());
        assert!(nbs.set_neighbor(5, 1.0).is_none());
        nbs
    }

    #[test]
    fn list_keeps_insertion_order() {
        let nbs: ListNeighborhood = fill();
        assert_eq!(
            nbs.neighbors().collect_vec(),
            vec![(4, 2.0), (1, 3.0), (5, 1.0)]
        );
    }

    #[test]
    fn matrix_is_index_ordered() {
        let nbs: MatrixNeighborhood = fill();
        assert_eq!(
            nbs.neighbors().collect_vec(),
            vec![(1, 3.0), (4, 2.0), (5, 1.0)]
        );
    }

    fn overwrite_and_remove<N: Neighborhood>() {
        let mut nbs: N = fill();
        assert_eq!(nbs.set_neighbor(4, 7.0), Some(2.0));
        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.weight_to(4), Some(7.0));

        assert_eq!(nbs.try_remove_neighbor(4), Some(7.0));
        assert_eq!(nbs.try_remove_neighbor(4), None);
        assert_eq!(nbs.num_of_neighbors(), 2);

        // drop node 1 and shift 5 -> 4
        assert!(nbs.remove_node(1));
        assert!(!nbs.remove_node(0));
        assert_eq!(nbs.neighbors().collect_vec(), vec![(3, 1.0)]);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert_eq!(nbs.neighbors().count(), 0);
    }

    #[test]
    fn list_editing() {
        overwrite_and_remove::<ListNeighborhood>();
    }

    #[test]
    fn matrix_editing() {
        overwrite_and_remove::<MatrixNeighborhood>();
    }

    #[test]
    fn matrix_grow() {
        let mut nbs = MatrixNeighborhood::new(1);
        nbs.grow();
        nbs.set_neighbor(1, 4.0);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(2));
    }
}
