//! **mazegen** carves mazes into rectangular grids of cells.
//!
//! A `Grid` holds the fixed adjacency (`edges`) of every cell and the passages carved so far
//! (`paths`). One of the `generators` builds a spanning tree of passages over it, which can then
//! be braided to remove dead ends.
//!
//! ```
//! use mazegen::generators::{Backtracker, Maze};
//! use mazegen::grid::Grid;
//! use mazegen::units::{ColumnsCount, RowsCount};
//!
//! let mut grid = Grid::with_edges(RowsCount(8), ColumnsCount(8), true, false).unwrap();
//! let mut maze = Backtracker::from_seed(42);
//! maze.build(&mut grid).unwrap();
//! assert!(grid.is_spanning_tree());
//! maze.braid(&mut grid, 0.5).unwrap();
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod units;
mod utils;
