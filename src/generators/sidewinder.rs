use error_chain::bail;
use rand::Rng;
use rand_xorshift::XorShiftRng;

use super::{log_built, require_orthogonal_edges, seeded_rng, Maze};
use crate::cells::Direction;
use crate::errors::*;
use crate::grid::Grid;
use crate::utils;

/// Chance of closing out a run at a cell where it could continue, unless configured otherwise.
pub const DEFAULT_CLOSE_PROBABILITY: f64 = 0.5;

/// Sidewinder: each row is cut into runs extending along the horizontal half of the diagonal
/// bias. Closing out a run carves towards the vertical half from one random member of it.
///
/// Rows are visited in the same direction that runs extend in (west to east for an eastern
/// bias), otherwise we get closed off rooms. The row on the boundary facing the vertical bias can
/// never close out and so becomes one long corridor.
#[derive(Debug, Clone)]
pub struct Sidewinder<R = XorShiftRng> {
    rng: R,
    bias: Direction,
    close_probability: f64,
}

impl Sidewinder<XorShiftRng> {
    pub fn from_seed(seed: u64) -> Sidewinder<XorShiftRng> {
        Sidewinder::new(seeded_rng(seed))
    }
}

impl<R: Rng> Sidewinder<R> {
    /// North east biased, closing out runs on a fair coin flip.
    pub fn new(rng: R) -> Sidewinder<R> {
        Sidewinder {
            rng,
            bias: Direction::NorthEast,
            close_probability: DEFAULT_CLOSE_PROBABILITY,
        }
    }

    /// `close_probability` is the chance of ending a run at a cell where it could continue.
    pub fn with_bias(rng: R, bias: Direction, close_probability: f64) -> Result<Sidewinder<R>> {
        if !bias.is_diagonal() {
            bail!(ErrorKind::InvalidDiagonal(bias));
        }
        Ok(Sidewinder {
            rng,
            bias,
            close_probability: utils::check_probability("close probability", close_probability)?,
        })
    }

    pub fn bias(&self) -> Direction {
        self.bias
    }

    pub fn close_probability(&self) -> f64 {
        self.close_probability
    }
}

impl<R: Rng> Maze for Sidewinder<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "sidewinder"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_orthogonal_edges(grid)?;
        grid.reset_paths(false);

        let (close_out_direction, run_direction) = self.bias
            .components()
            .ok_or(ErrorKind::InvalidDiagonal(self.bias))?;

        for mut row in grid.iter_row() {
            if run_direction == Direction::West {
                row.reverse();
            }

            let mut run = vec![];
            for cell in row {
                run.push(cell);

                let next_in_run = grid.neighbour_at_direction(cell, run_direction);
                let at_run_end_boundary = next_in_run.is_none();
                let at_close_out_boundary = grid.neighbour_at_direction(cell, close_out_direction)
                    .is_none();

                let should_close_out = at_run_end_boundary ||
                                       (!at_close_out_boundary &&
                                        self.rng.gen_bool(self.close_probability));

                match next_in_run {
                    Some(next) if !should_close_out => {
                        let _ = grid.connect_path(cell, next, true)?;
                    }
                    _ => {
                        let run_member = run[self.rng.gen_range(0..run.len())];
                        if let Some(close_out) = grid.neighbour_at_direction(run_member,
                                                                             close_out_direction) {
                            let _ = grid.connect_path(run_member, close_out, true)?;
                        }
                        run.clear();
                    }
                }
            }
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
