/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = AdjList::with_vertices(5, true, true);
g.connect_path([0, 1, 2], 1.0).unwrap();
g.connect_cycle([2, 3, 4], 2.0).unwrap();
g.connect_clique([0, 2, 4], 3.0).unwrap();

assert_eq!(
    g.ordered_edges().iter().map(|e| e.edge()).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 0), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 0), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Existing edges between the given nodes are overwritten with the new weight.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Errors
    /// Stops at the first edge that cannot be inserted.
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and
    /// the last node is connected back to the first.
    ///
    /// # Errors
    /// Stops at the first edge that cannot be inserted.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph) without self-loops.
    /// In directed graphs, both orientations are inserted.
    ///
    /// # Errors
    /// Stops at the first edge that cannot be inserted.
    fn connect_clique<C>(&mut self, nodes: C, weight: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.insert_edge(u, v, weight)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.insert_edge(prev, cur, weight)?;
                prev = cur;
            }

            self.insert_edge(prev, first, weight)?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C, weight: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        let directed = self.is_directed();

        for &u in &nodes {
            for &v in &nodes {
                let e = Edge(u, v);
                if e.is_loop() || (!directed && !e.is_normalized()) {
                    continue;
                }

                self.insert_edge(u, v, weight)?;
            }
        }
        Ok(())
    }
}

/// Creates the complete undirected, unweighted graph `K_n`
///
/// # Errors
/// Propagates insertion failures of the representation.
pub fn complete_graph<G>(n: NumNodes) -> Result<G>
where
    G: GraphNew + GraphEdgeEditing + GraphType,
{
    let mut graph = G::with_vertices(n, false, false);
    graph.connect_clique(0..n, DEFAULT_WEIGHT)?;
    Ok(graph)
}
