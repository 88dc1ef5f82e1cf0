use criterion::{criterion_group, criterion_main, Criterion};
use mazegen::{
    generators::{self, Algorithm, Maze},
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};

fn grid_32() -> Grid {
    Grid::with_edges(RowsCount(32), ColumnsCount(32), true, false).unwrap()
}

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm) {
    let mut g = grid_32();
    let mut maze = algorithm.generator(7);
    c.bench_function(&format!("{}_maze_32", algorithm), move |b| {
        b.iter(|| maze.build(&mut g).unwrap())
    });
}

fn bench_binary_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::BinaryTree);
}

fn bench_sidewinder_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Sidewinder);
}

fn bench_aldous_broder_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::AldousBroder);
}

fn bench_wilson_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Wilson);
}

fn bench_wilson_maze_256(c: &mut Criterion) {
    let mut g = Grid::with_edges(RowsCount(256), ColumnsCount(256), true, false).unwrap();
    let mut maze = generators::Wilson::from_seed(7);
    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("wilson_maze_256", |b| b.iter(|| maze.build(&mut g).unwrap()));
    group.finish();
}

fn bench_aldous_broder_maze_256(c: &mut Criterion) {
    let mut g = Grid::with_edges(RowsCount(256), ColumnsCount(256), true, false).unwrap();
    let mut maze = generators::AldousBroder::from_seed(7);
    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("aldous_broder_maze_256", |b| b.iter(|| maze.build(&mut g).unwrap()));
    group.finish();
}

fn bench_hunt_and_kill_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::HuntAndKill);
}

fn bench_backtracker_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Backtracker);
}

fn bench_growing_tree_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::GrowingTree);
}

fn bench_recursive_division_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::RecursiveDivision);
}

fn bench_wilson_diagonal_maze_32(c: &mut Criterion) {
    let mut g = Grid::with_edges(RowsCount(32), ColumnsCount(32), true, true).unwrap();
    let mut maze = generators::Wilson::from_seed(7);
    c.bench_function("wilson_diagonal_maze_32", move |b| {
        b.iter(|| maze.build(&mut g).unwrap())
    });
}

fn bench_full_braid_32(c: &mut Criterion) {
    let mut maze = generators::Backtracker::from_seed(7);
    let mut template = grid_32();
    maze.build(&mut template).unwrap();
    c.bench_function("full_braid_32", move |b| {
        b.iter(|| {
            let mut g = template.clone();
            maze.braid(&mut g, 1.0).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_binary_maze_32,
    bench_sidewinder_maze_32,
    bench_aldous_broder_maze_32,
    bench_wilson_maze_32,
    bench_wilson_maze_256,
    bench_aldous_broder_maze_256,
    bench_hunt_and_kill_maze_32,
    bench_backtracker_maze_32,
    bench_growing_tree_maze_32,
    bench_recursive_division_maze_32,
    bench_wilson_diagonal_maze_32,
    bench_full_braid_32
);
criterion_main!(benches);
