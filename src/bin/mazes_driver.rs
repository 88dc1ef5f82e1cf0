use docopt::Docopt;
use error_chain::bail;
use rand::Rng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mazegen::cells::Direction;
use mazegen::errors::*;
use mazegen::generators::{self, Algorithm, BinaryTree, Maze, Sidewinder,
                          DEFAULT_CLOSE_PROBABILITY};
use mazegen::grid::Grid;
use mazegen::units::{ColumnsCount, RowsCount};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver <algorithm> [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--diagonal] [--no-orthogonal] [--braid=<t>] [--bias=<dir>]

Algorithms:
    aldous-broder, wilson, backtracker, hunt-kill, growing-tree, binary, sidewinder, recursive-division

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --seed=<s>             Seed for the maze generator. Random if not given.
    --diagonal             Cells are also adjacent to their diagonal neighbours.
    --no-orthogonal        Cells are not adjacent to their north/south/east/west neighbours.
    --braid=<t>            Probability in [0, 1] of removing each dead end once the maze is built.
    --bias=<dir>           Diagonal bias (ne, nw, se, sw) for the binary and sidewinder algorithms.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_algorithm: String,
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_diagonal: bool,
    flag_no_orthogonal: bool,
    flag_braid: Option<f64>,
    flag_bias: Option<String>,
}

fn main() -> Result<()> {

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut maze_grid = Grid::with_edges(RowsCount(height),
                                         ColumnsCount(width),
                                         !args.flag_no_orthogonal,
                                         args.flag_diagonal)?;

    let algorithm = args.arg_algorithm.parse::<Algorithm>()?;
    let seed = args.flag_seed.unwrap_or_else(|| generators::weak_rng().gen());
    info!(%algorithm, seed, "generating maze");

    let mut maze = maze_generator(algorithm, seed, args.flag_bias.as_deref())?;
    maze.build(&mut maze_grid)?;

    let dead_ends_removed = match args.flag_braid {
        Some(threshold) => maze.braid(&mut maze_grid, threshold)?,
        None => 0,
    };

    println!("algorithm:      {}", algorithm);
    println!("seed:           {}", seed);
    println!("dimensions:     {} x {}", width, height);
    println!("paths:          {}", maze_grid.path_count());
    println!("dead ends:      {}", maze_grid.dead_ends().len());
    println!("braided away:   {}", dead_ends_removed);
    println!("spanning tree:  {}", maze_grid.is_spanning_tree());

    Ok(())
}

fn maze_generator(algorithm: Algorithm,
                  seed: u64,
                  bias: Option<&str>)
                  -> Result<Box<dyn Maze<Rng = XorShiftRng>>> {
    let bias = match bias {
        Some(b) => parse_bias(b)?,
        None => return Ok(algorithm.generator(seed)),
    };

    let rng = generators::seeded_rng(seed);
    match algorithm {
        Algorithm::BinaryTree => Ok(Box::new(BinaryTree::with_bias(rng, bias)?)),
        Algorithm::Sidewinder => {
            Ok(Box::new(Sidewinder::with_bias(rng, bias, DEFAULT_CLOSE_PROBABILITY)?))
        }
        _ => {
            warn!(%algorithm, "--bias only applies to the binary and sidewinder algorithms");
            Ok(algorithm.generator(seed))
        }
    }
}

fn parse_bias(bias: &str) -> Result<Direction> {
    let dir = match bias.to_lowercase().as_str() {
        "ne" | "northeast" | "north-east" => Direction::NorthEast,
        "nw" | "northwest" | "north-west" => Direction::NorthWest,
        "se" | "southeast" | "south-east" => Direction::SouthEast,
        "sw" | "southwest" | "south-west" => Direction::SouthWest,
        other => bail!("unknown bias direction '{}', expected one of ne, nw, se, sw", other),
    };
    Ok(dir)
}
