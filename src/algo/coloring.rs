/*!
Vertex coloring.

All strategies color the [`UnderlyingGraph`]: arcs of directed graphs constrain both endpoints
and self-loops are ignored. Every run returns a fresh [`Coloring`] together with its elapsed time.

- [`ColoringStrategy::BruteForce`] is exact and exponential; it refuses graphs with more than
  [`GraphColoring::brute_force_limit`] vertices.
- [`ColoringStrategy::WelshPowell`], [`ColoringStrategy::Dsatur`] and
  [`ColoringStrategy::Greedy`] assign each vertex the smallest color not used by its
  already-colored neighbors and only differ in the order in which vertices are colored.
*/

use std::{
    cmp::Reverse,
    fmt::Display,
    time::{Duration, Instant},
};

use bitvec::prelude::*;
use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Default vertex limit of the exact brute-force search
pub const DEFAULT_BRUTE_FORCE_LIMIT: NumNodes = 8;

/// Vertex ordering rule of a coloring run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColoringStrategy {
    /// Tries `k = 2, 3, ...` colors and enumerates all assignments for each `k`
    BruteForce,
    /// Colors vertices by descending degree
    WelshPowell,
    /// Colors the vertex with the most distinctly colored neighbors next
    Dsatur,
    /// Colors vertices by index
    Greedy,
}

impl Display for ColoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BruteForce => "brute-force",
            Self::WelshPowell => "welsh-powell",
            Self::Dsatur => "dsatur",
            Self::Greedy => "greedy",
        };
        write!(f, "{name}")
    }
}

/// Result of a coloring run
#[derive(Debug, Clone)]
pub struct Coloring {
    /// Strategy that produced this coloring
    pub strategy: ColoringStrategy,
    /// `colors[u]` is the color of vertex `u`
    pub colors: Vec<Color>,
    /// Number of distinct colors in `colors`
    pub num_colors: NumNodes,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl Coloring {
    /// Returns *true* if `colors` covers all vertices of `graph` and no edge
    /// (ignoring self-loops) connects two vertices of the same color
    pub fn is_valid_for<G: AdjacencyList>(&self, graph: &G) -> bool {
        self.colors.len() == graph.len()
            && graph.edges().all(|e| {
                e.edge().is_loop()
                    || self.colors[e.origin as usize] != self.colors[e.destination as usize]
            })
    }

    /// Returns the vertices of each color class
    pub fn color_classes(&self) -> Vec<Vec<Node>> {
        let mut classes = vec![Vec::new(); self.num_colors as usize];
        let dense = self.colors.iter().copied().unique().sorted().collect_vec();
        for (u, c) in self.colors.iter().enumerate() {
            if let Ok(i) = dense.binary_search(c) {
                classes[i].push(u as Node);
            }
        }
        classes
    }
}

/// Configurable coloring run
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let triangle = AdjList::from_edges(3, false, false, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// let coloring = GraphColoring::new(ColoringStrategy::Dsatur).run(&triangle).unwrap();
///
/// assert_eq!(coloring.num_colors, 3);
/// assert!(coloring.is_valid_for(&triangle));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphColoring {
    strategy: ColoringStrategy,
    brute_force_limit: NumNodes,
}

impl GraphColoring {
    /// Configures a run with the given strategy
    pub fn new(strategy: ColoringStrategy) -> Self {
        Self {
            strategy,
            brute_force_limit: DEFAULT_BRUTE_FORCE_LIMIT,
        }
    }

    /// Sets the maximum number of vertices accepted by [`ColoringStrategy::BruteForce`]
    pub fn brute_force_limit(mut self, limit: NumNodes) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Colors `graph`
    ///
    /// # Errors
    /// Returns `GraphError::TooLarge` if the brute-force strategy is selected and the graph
    /// has more vertices than the configured limit.
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Result<Coloring> {
        let start = Instant::now();

        if self.strategy == ColoringStrategy::BruteForce
            && graph.number_of_nodes() > self.brute_force_limit
        {
            return Err(GraphError::TooLarge {
                what: "brute-force coloring",
                limit: self.brute_force_limit,
                len: graph.number_of_nodes(),
            });
        }

        let view = UnderlyingGraph::of(graph);
        let colors = match self.strategy {
            ColoringStrategy::BruteForce => brute_force(&view),
            ColoringStrategy::WelshPowell => {
                // stable: ties keep index order
                let order = view
                    .vertices()
                    .sorted_by_key(|&u| Reverse(view.degree_of(u)))
                    .collect_vec();
                color_in_order(&view, order)
            }
            ColoringStrategy::Dsatur => dsatur(&view),
            ColoringStrategy::Greedy => color_in_order(&view, view.vertices_range()),
        };

        let num_colors = colors.iter().unique().count() as NumNodes;
        let elapsed = start.elapsed();
        debug!(
            strategy = %self.strategy,
            num_colors,
            ?elapsed,
            "coloring finished"
        );

        Ok(Coloring {
            strategy: self.strategy,
            colors,
            num_colors,
            elapsed,
        })
    }
}

/// Returns the smallest color not used by any colored neighbor of `u`
fn smallest_free_color(view: &UnderlyingGraph, colors: &[Option<Color>], u: Node) -> Color {
    let mut used = bitvec![0; view.degree_of(u) as usize + 1];
    for &v in view.neighbors(u) {
        if let Some(c) = colors[v as usize]
            && (c as usize) < used.len()
        {
            used.set(c as usize, true);
        }
    }
    // at most `degree` colors are blocked, so a free one exists
    used.first_zero().unwrap_or(used.len()) as Color
}

fn color_in_order<I>(view: &UnderlyingGraph, order: I) -> Vec<Color>
where
    I: IntoIterator<Item = Node>,
{
    let mut colors: Vec<Option<Color>> = vec![None; view.len()];
    for u in order {
        colors[u as usize] = Some(smallest_free_color(view, &colors, u));
    }
    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

fn dsatur(view: &UnderlyingGraph) -> Vec<Color> {
    let n = view.len();
    let mut colors: Vec<Option<Color>> = vec![None; n];
    // distinct colors among the colored neighbors; its size is the saturation
    let mut seen: Vec<FxHashSet<Color>> = vec![FxHashSet::default(); n];

    for _ in 0..n {
        // max by (saturation, degree); on ties the lowest index wins
        let Some(u) = view
            .vertices()
            .filter(|&u| colors[u as usize].is_none())
            .min_by_key(|&u| {
                (
                    Reverse(seen[u as usize].len()),
                    Reverse(view.degree_of(u)),
                )
            })
        else {
            break;
        };

        let color = smallest_free_color(view, &colors, u);
        colors[u as usize] = Some(color);

        for &v in view.neighbors(u) {
            if colors[v as usize].is_none() {
                seen[v as usize].insert(color);
            }
        }
    }

    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/// Returns *true* if no edge of `view` connects two vertices of the same color
fn is_proper(view: &UnderlyingGraph, colors: &[Color]) -> bool {
    view.vertices().all(|u| {
        view.neighbors(u)
            .iter()
            .all(|&v| colors[u as usize] != colors[v as usize])
    })
}

/// Advances `assignment` to the next one in lexicographic order over `[0, k)^n`.
/// Returns *false* after the last assignment.
fn next_assignment(assignment: &mut [Color], k: Color) -> bool {
    for digit in assignment.iter_mut().rev() {
        *digit += 1;
        if *digit < k {
            return true;
        }
        *digit = 0;
    }
    false
}

fn brute_force(view: &UnderlyingGraph) -> Vec<Color> {
    let n = view.len();

    for k in 2..=n as Color {
        let mut assignment = vec![0 as Color; n];
        loop {
            if is_proper(view, &assignment) {
                return assignment;
            }
            if !next_assignment(&mut assignment, k) {
                break;
            }
        }
    }

    // `n <= 1`: no candidate count to try, every vertex gets its own color
    (0..n as Color).collect()
}

/// Coloring on every graph
pub trait Colorable: AdjacencyList + Sized {
    /// Colors the graph with `strategy` and the default configuration
    ///
    /// # Errors
    /// See [`GraphColoring::run`].
    fn color_with(&self, strategy: ColoringStrategy) -> Result<Coloring> {
        GraphColoring::new(strategy).run(self)
    }
}

impl<G> Colorable for G where G: AdjacencyList + Sized {}
