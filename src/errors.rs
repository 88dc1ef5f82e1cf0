// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Other modules `use crate::errors::*;` to get at everything `error_chain!` creates.
#![allow(deprecated)]

use crate::cells::Direction;
use error_chain::error_chain;

error_chain! {

    foreign_links {
        DocOptFailure(::docopt::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("grid dimensions must be positive")
            display("invalid grid dimensions {} x {}, rows and columns must be positive", rows, columns)
        }
        InvalidDiagonal(dir: Direction) {
            description("bias must be a diagonal direction")
            display("{:?} is not one of the diagonal directions NE, NW, SE, SW", dir)
        }
        InvalidProbability(name: &'static str, value: f64) {
            description("probability outside of [0, 1]")
            display("{} must be within [0, 1], got {}", name, value)
        }
        CellOutOfBounds(row: usize, column: usize) {
            description("cell coordinate outside of the grid")
            display("cell (row {}, column {}) is outside of the grid", row, column)
        }
        IndexOutOfBounds(index: usize, size: usize) {
            description("cell index outside of the grid")
            display("cell index {} is outside of a grid of {} cells", index, size)
        }
        NotAdjacent(from: usize, to: usize) {
            description("cells do not share an edge")
            display("cell {} has no edge to cell {}", from, to)
        }
        DisconnectedTopology {
            description("the grid edges do not connect every cell")
            display("the grid edges do not connect every cell, no spanning maze exists")
        }
        MissingOrthogonalEdges {
            description("the algorithm requires orthogonal edges")
            display("the grid edges were reset without orthogonal adjacency")
        }
    }
}
