/*!
# Graph Representations

Two storage backends share the same [`Graph`] container and differ only in their
[`Neighborhood`]:

- [`AdjList`] keeps per-vertex `(neighbor, weight)` lists in insertion order: cheap
  neighborhood iteration, linear-time pair queries.
- [`AdjMatrix`] keeps an `n x n` matrix of optional weights: constant-time pair queries,
  neighborhoods are reported in ascending index order.

[`MirroredGraph`] keeps one of each and applies every mutation to both.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod graph;
mod labels;
mod mirrored;
mod neighborhood;

pub use graph::*;
pub use labels::*;
pub use mirrored::*;
pub use neighborhood::*;
