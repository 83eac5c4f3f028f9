/*!
# Graph Generators

Random and deterministic graph construction, mainly used to build fixtures for tests and
benchmarks.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters (e.g., `.nodes(n).edges(m).weights(10)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into a single constructor for every graph that can be
built from scratch, and [`GeneratorSubstructures`] adds paths, cycles and cliques to existing
graphs.
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod substructures;

pub use gnm::*;
pub use substructures::*;

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<WeightedEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a uniform random `G(n,m)` graph without self-loops and with exactly
    /// `min(m, max)` distinct edges, where `max` is the number of possible edges.
    /// Weighted graphs receive integral weights drawn uniformly from `1..=max_weight`.
    ///
    /// # Errors
    /// Propagates insertion failures of the representation.
    fn gnm<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        directed: bool,
        weighted: bool,
        max_weight: u32,
    ) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnm<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        directed: bool,
        weighted: bool,
        max_weight: u32,
    ) -> Result<Self>
    where
        R: Rng,
    {
        let mut generator = Gnm::new().nodes(n).edges(m).directed(directed);
        if weighted {
            generator = generator.weights(max_weight);
        }
        Self::from_edges(n, directed, weighted, generator.stream(rng))
    }
}
