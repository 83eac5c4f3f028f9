/*!
# Graph Algorithms

This module provides the classical algorithms of this crate, built on top of the query traits
in [`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, spanning trees and coloring.

Every algorithm is available as a configurable struct (*Builder* / *Setter* pattern) with a
`run(&graph)` method, and through a trait implemented on all graphs for the default configuration.
Algorithms never mutate the graph they read and return freshly allocated results that carry
their own elapsed wall-clock time where the result is meant for benchmarking.
*/

mod coloring;
mod dijkstra;
mod mst;
mod summary;
mod traversal;
mod underlying;
mod union_find;

use crate::prelude::*;

pub use coloring::*;
pub use dijkstra::*;
pub use mst::*;
pub use summary::*;
pub use traversal::*;
pub use underlying::*;
pub use union_find::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Undirected weighted graph on 5 vertices with unique shortest paths from `0`
    pub fn five_vertices<G: GraphNew + GraphEdgeEditing>() -> G {
        G::from_edges(
            5,
            false,
            true,
            [
                (0, 1, 3.0),
                (0, 2, 5.0),
                (1, 3, 2.0),
                (2, 4, 1.0),
                (3, 4, 4.0),
            ],
        )
        .unwrap()
    }
}
