/*!
`wgraphs` is a graph data structure & algorithms library for small to medium graphs that are
- **labelled** : every vertex carries a unique string label and a permanent [`VertexId`](node::VertexId)
- **weighted** : edges carry an `f64` weight (unweighted graphs use weight `1`)
- **directed or undirected** : fixed when the graph is created or loaded

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Removing a vertex shifts all larger indices down by one, so code that needs to refer to a vertex
across removals should use its [`VertexId`](node::VertexId) instead.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and [`WeightedEdge`](edge::WeightedEdge)
if the weight is required.

### Directed vs Undirected

- In an **undirected** graph, inserting `(u, v)` also inserts `(v, u)` with the same weight and the pair is counted as a single edge.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are considered distinct.

### Available Representations

See the [`repr`] module:

- [`AdjList`](crate::repr::AdjList) : per-vertex neighbor lists
- [`AdjMatrix`](crate::repr::AdjMatrix) : dense weight matrix
- [`MirroredGraph`](crate::repr::MirroredGraph) : both of the above, kept in lock-step

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using the *Builder* pattern before running the configured algorithm on a provided graph.
The most commonly used functionalities are also implemented via traits on the graph itself, making them usable without configuring the algorithm beforehand.
Every algorithm is written against the traits in [`ops`] and never against a concrete representation.

Failures are reported as [`GraphError`](error::GraphError) values; invalid input never aborts the process.
Diagnostics are emitted through [`tracing`], installing a subscriber is left to the application.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes BFS/DFS (`graph.bfs(start_node)`), Dijkstra, minimum spanning trees (Kruskal & Prim), vertex coloring and graph summaries,
- [`gens`] includes a random `G(n,m)` generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes reading and writing the edge-list format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use wgraphs::{prelude::*, algo::*};

let graph = AdjList::from_edges(
    5,
    false,
    true,
    [(0, 1, 3.0), (0, 2, 5.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 4.0)],
)
.unwrap();

assert_eq!(graph.bfs_order(0, None).unwrap(), vec![0, 1, 2, 3, 4]);
assert_eq!(graph.dijkstra(0).unwrap().path_to(4), vec![0, 2, 4]);
assert_eq!(graph.kruskal().total_weight, 10.0);
assert_eq!(graph.color_with(ColoringStrategy::Dsatur).unwrap().num_colors, 3);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `wgraphs::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        repr::*,
    };
}
