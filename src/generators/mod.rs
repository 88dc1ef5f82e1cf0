//! Maze generation algorithms.
//!
//! Each algorithm owns its random number generator, so seeding one maze makes its output fully
//! reproducible and independent mazes can be generated on different threads without sharing any
//! state. Every `build` carves a spanning tree of paths (a perfect maze) over the grid edges.

use error_chain::bail;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::cells::CellIndexSmallVec;
use crate::errors::*;
use crate::grid::Grid;
use crate::utils;

mod aldous_broder;
mod backtracker;
mod binary_tree;
mod growing_tree;
mod hunt_and_kill;
mod recursive_division;
mod sidewinder;
mod wilson;

pub use self::aldous_broder::AldousBroder;
pub use self::backtracker::Backtracker;
pub use self::binary_tree::BinaryTree;
pub use self::growing_tree::{GrowingTree, SelectionStrategy};
pub use self::hunt_and_kill::HuntAndKill;
pub use self::recursive_division::RecursiveDivision;
pub use self::sidewinder::{Sidewinder, DEFAULT_CLOSE_PROBABILITY};
pub use self::wilson::Wilson;

/// A maze generation algorithm bound to its own random number generator.
pub trait Maze {
    type Rng: Rng;

    fn name(&self) -> &'static str;

    fn rng(&mut self) -> &mut Self::Rng;

    /// Replace whatever paths the grid has with a perfect maze over its edges.
    fn build(&mut self, grid: &mut Grid) -> Result<()>;

    /// Remove dead ends, each with probability `threshold`. Returns how many were removed.
    fn braid(&mut self, grid: &mut Grid, threshold: f64) -> Result<usize> {
        braid(self.rng(), grid, threshold)
    }
}

/// The generator used by `from_seed` constructors.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// A generator seeded from operating system entropy.
pub fn weak_rng() -> XorShiftRng {
    XorShiftRng::from_entropy()
}

/// Carve an extra passage out of dead ends, turning the spanning tree into a graph with loops.
///
/// Dead ends are visited in row-major order. Each one that is still a dead end when reached is
/// linked, with probability `threshold`, to the uncarved neighbour having the fewest paths,
/// which keeps extra connectivity from piling up on hub cells. Ties are broken randomly.
pub fn braid<R: Rng + ?Sized>(rng: &mut R, grid: &mut Grid, threshold: f64) -> Result<usize> {
    let threshold = utils::check_probability("braid threshold", threshold)?;

    let mut removed = 0;
    for dead_end in grid.dead_ends() {

        // an earlier carve may already have opened it up
        if !grid[dead_end].is_dead_end() || !rng.gen_bool(threshold) {
            continue;
        }

        let candidates = grid.uncarved_neighbours(dead_end);
        let fewest_paths = candidates.iter().map(|&c| grid[c].paths().len()).min();
        if let Some(fewest) = fewest_paths {
            let least_connected = candidates.iter()
                .cloned()
                .filter(|&c| grid[c].paths().len() == fewest)
                .collect::<CellIndexSmallVec>();
            if let Some(&target) = least_connected.choose(rng) {
                let _ = grid.connect_path(dead_end, target, true)?;
                removed += 1;
            }
        }
    }

    debug!(threshold, removed, remaining = grid.dead_ends().len(), "braided maze");
    Ok(removed)
}

/// A spanning maze needs every cell reachable along edges. The random walk algorithms would
/// never terminate otherwise.
pub(crate) fn require_connected_edges(grid: &Grid) -> Result<()> {
    if grid.size() > 1 && !grid.is_edge_connected() {
        bail!(ErrorKind::DisconnectedTopology);
    }
    Ok(())
}

/// For the algorithms that only carve north/south/east/west.
pub(crate) fn require_orthogonal_edges(grid: &Grid) -> Result<()> {
    if grid.size() > 1 && !grid.has_orthogonal_edges() {
        bail!(ErrorKind::MissingOrthogonalEdges);
    }
    Ok(())
}

pub(crate) fn log_built(algorithm: &'static str, grid: &Grid) {
    debug!(algorithm,
           rows = grid.rows().0,
           columns = grid.columns().0,
           paths = grid.path_count(),
           dead_ends = grid.dead_ends().len(),
           "built maze");
}

/// Run time selection of an algorithm, e.g. from a command line argument.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Algorithm {
    AldousBroder,
    Wilson,
    Backtracker,
    HuntAndKill,
    GrowingTree,
    BinaryTree,
    Sidewinder,
    RecursiveDivision,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [Algorithm::AldousBroder,
                                     Algorithm::Wilson,
                                     Algorithm::Backtracker,
                                     Algorithm::HuntAndKill,
                                     Algorithm::GrowingTree,
                                     Algorithm::BinaryTree,
                                     Algorithm::Sidewinder,
                                     Algorithm::RecursiveDivision];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AldousBroder => "aldous-broder",
            Algorithm::Wilson => "wilson",
            Algorithm::Backtracker => "backtracker",
            Algorithm::HuntAndKill => "hunt-kill",
            Algorithm::GrowingTree => "growing-tree",
            Algorithm::BinaryTree => "binary",
            Algorithm::Sidewinder => "sidewinder",
            Algorithm::RecursiveDivision => "recursive-division",
        }
    }

    /// The algorithm with its default settings, seeded with `seed`.
    pub fn generator(self, seed: u64) -> Box<dyn Maze<Rng = XorShiftRng>> {
        match self {
            Algorithm::AldousBroder => Box::new(AldousBroder::from_seed(seed)),
            Algorithm::Wilson => Box::new(Wilson::from_seed(seed)),
            Algorithm::Backtracker => Box::new(Backtracker::from_seed(seed)),
            Algorithm::HuntAndKill => Box::new(HuntAndKill::from_seed(seed)),
            Algorithm::GrowingTree => Box::new(GrowingTree::from_seed(seed)),
            Algorithm::BinaryTree => Box::new(BinaryTree::from_seed(seed)),
            Algorithm::Sidewinder => Box::new(Sidewinder::from_seed(seed)),
            Algorithm::RecursiveDivision => Box::new(RecursiveDivision::from_seed(seed)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        Algorithm::ALL
            .iter()
            .cloned()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| format!("unknown maze algorithm '{}'", s).into())
    }
}
