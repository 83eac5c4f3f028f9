use fxhash::FxHashMap;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes, `m` edges and no self-loops.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: total number of edges (clamped to the number of possible edges)
/// - `.directed(bool)`: whether `(u, v)` and `(v, u)` are distinct edges
/// - `.weights(max)`: draw integral weights from `1..=max` instead of using weight `1`
///
/// Undirected edges are produced in normalized form (`origin < destination`).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: u64,
    m: u64,
    directed: bool,
    max_weight: Option<u32>,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }

    /// Sets the number of edges
    pub fn edges(mut self, m: NumEdges) -> Self {
        self.m = m as u64;
        self
    }

    /// Marks the graph as directed (or not).
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Attaches weights drawn uniformly from `1..=max_weight` (at least `1`)
    pub fn weights(mut self, max_weight: u32) -> Self {
        self.max_weight = Some(max_weight.max(1));
        self
    }

    /// Returns the number of possible loop-free edges
    fn edge_space(&self) -> u64 {
        let pairs = self.n * self.n.saturating_sub(1);
        if self.directed { pairs } else { pairs / 2 }
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over a random `G(n,m)` edge set.
    ///
    /// Internally, edges are uniformly sampled without replacement.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let end = self.edge_space();
        GnmGenerator {
            n: self.n,
            rem: self.m.min(end),
            cur: 0,
            end,
            map: FxHashMap::default(),
            rng,
            directed: self.directed,
            max_weight: self.max_weight,
        }
    }
}

/// Given `n` nodes and the space of all `end` loop-free edges, this iterator produces
/// exactly `m` uniformly random and distinct edges without replacement.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// It emulates a partial Fisher-Yates shuffle of `[0, end)` with a sparse map of swapped
/// positions, so memory is proportional to `m` rather than to `end`.
struct GnmGenerator<'a, R>
where
    R: Rng,
{
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    rng: &'a mut R,
    directed: bool,
    max_weight: Option<u32>,
}

impl<R> GnmGenerator<'_, R>
where
    R: Rng,
{
    /// Selects the next unique edge index
    fn next_step(&mut self) -> Option<u64> {
        if self.rem == 0 {
            return None;
        }

        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        // position `drawn` now holds whatever was at `cur`
        let replacement = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, replacement);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }

    /// Maps an index in `[0, end)` to a loop-free edge
    fn decode(&self, x: u64) -> Edge {
        if self.directed {
            let u = x / (self.n - 1);
            let r = x % (self.n - 1);
            let v = if r < u { r } else { r + 1 };
            return Edge(u as Node, v as Node);
        }

        // pairs (v, u) with v < u are laid out row by row: row `u` starts at u(u-1)/2
        let mut u = ((1.0 + (1.0 + 8.0 * x as f64).sqrt()) / 2.0) as u64;
        while u * (u - 1) / 2 > x {
            u -= 1;
        }
        while (u + 1) * u / 2 <= x {
            u += 1;
        }
        let v = x - u * (u - 1) / 2;
        Edge(v as Node, u as Node)
    }
}

impl<R> Iterator for GnmGenerator<'_, R>
where
    R: Rng,
{
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next_step()?;
        let edge = self.decode(x);
        let weight = match self.max_weight {
            Some(max) => self.rng.random_range(1..=max) as Weight,
            None => DEFAULT_WEIGHT,
        };
        Some(edge.with_weight(weight))
    }

    /// Returns the number of edges remaining to be generated.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R> ExactSizeIterator for GnmGenerator<'_, R> where R: Rng {}
