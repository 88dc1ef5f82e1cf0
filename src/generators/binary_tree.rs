use error_chain::bail;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use super::{log_built, require_orthogonal_edges, seeded_rng, Maze};
use crate::cells::Direction;
use crate::errors::*;
use crate::grid::Grid;

/// Binary tree: every cell carves towards one of the two orthogonal halves of the diagonal bias,
/// so each cell links to a single parent and the bias corner is the root.
///
/// The two halves stay fixed for the whole build; mixing them would wall off regions. The two
/// boundaries facing the bias end up as unbroken corridors.
#[derive(Debug, Clone)]
pub struct BinaryTree<R = XorShiftRng> {
    rng: R,
    bias: Direction,
}

impl BinaryTree<XorShiftRng> {
    pub fn from_seed(seed: u64) -> BinaryTree<XorShiftRng> {
        BinaryTree::new(seeded_rng(seed))
    }
}

impl<R: Rng> BinaryTree<R> {
    /// North east biased.
    pub fn new(rng: R) -> BinaryTree<R> {
        BinaryTree {
            rng,
            bias: Direction::NorthEast,
        }
    }

    /// Fails unless `bias` is one of the four diagonals.
    pub fn with_bias(rng: R, bias: Direction) -> Result<BinaryTree<R>> {
        if !bias.is_diagonal() {
            bail!(ErrorKind::InvalidDiagonal(bias));
        }
        Ok(BinaryTree { rng, bias })
    }

    pub fn bias(&self) -> Direction {
        self.bias
    }
}

impl<R: Rng> Maze for BinaryTree<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "binary"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_orthogonal_edges(grid)?;
        grid.reset_paths(false);

        let (vertical, horizontal) = self.bias
            .components()
            .ok_or(ErrorKind::InvalidDiagonal(self.bias))?;

        for cell in grid.iter() {
            let candidates = [vertical, horizontal]
                .iter()
                .filter_map(|&dir| grid.neighbour_at_direction(cell, dir))
                .collect::<SmallVec<[usize; 2]>>();

            // Only the corner cell in the bias direction has nowhere to go.
            if let Some(&link) = candidates.choose(&mut self.rng) {
                let _ = grid.connect_path(cell, link, true)?;
            }
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
