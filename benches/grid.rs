use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazegen::cells::Coordinate;
use mazegen::generators::{Backtracker, Maze};
use mazegen::grid::Grid;
use mazegen::units::{ColumnsCount, RowsCount};

fn bench_grid_11(c: &mut Criterion) {
    c.bench_function("grid_11", |b| {
        b.iter(|| Grid::with_edges(RowsCount(11), ColumnsCount(11), true, false).unwrap())
    });
}

fn bench_grid_128(c: &mut Criterion) {
    c.bench_function("grid_128", |b| {
        b.iter(|| Grid::with_edges(RowsCount(128), ColumnsCount(128), true, false).unwrap())
    });
}

fn bench_grid_500_diagonal(c: &mut Criterion) {
    c.bench_function("grid_500_diagonal", |b| {
        b.iter(|| Grid::with_edges(RowsCount(500), ColumnsCount(500), true, true).unwrap())
    });
}

fn bench_index_to_coordinate(c: &mut Criterion) {
    let g = Grid::new(RowsCount(11), ColumnsCount(11)).unwrap();
    c.bench_function("index_to_coordinate", move |b| {
        b.iter(|| g.coordinate_of(black_box(93)).unwrap())
    });
}

fn bench_neighbours_corner_of_grid(c: &mut Criterion) {
    let g = Grid::with_edges(RowsCount(11), ColumnsCount(11), true, true).unwrap();
    let corner = g.index_of(Coordinate::new(0, 0)).unwrap();
    c.bench_function("neighbours_corner_of_grid", move |b| {
        b.iter(|| g.neighbours(black_box(corner)))
    });
}

fn bench_neighbours_middle_of_grid(c: &mut Criterion) {
    let g = Grid::with_edges(RowsCount(11), ColumnsCount(11), true, true).unwrap();
    let mid = g.index_of(Coordinate::new(5, 5)).unwrap();
    c.bench_function("neighbours_middle_of_grid", move |b| {
        b.iter(|| g.neighbours(black_box(mid)))
    });
}

fn bench_dead_ends_128(c: &mut Criterion) {
    let mut g = Grid::with_edges(RowsCount(128), ColumnsCount(128), true, false).unwrap();
    Backtracker::from_seed(3).build(&mut g).unwrap();
    c.bench_function("dead_ends_128", move |b| b.iter(|| g.dead_ends()));
}

fn bench_is_spanning_tree_128(c: &mut Criterion) {
    let mut g = Grid::with_edges(RowsCount(128), ColumnsCount(128), true, false).unwrap();
    Backtracker::from_seed(3).build(&mut g).unwrap();
    c.bench_function("is_spanning_tree_128", move |b| b.iter(|| g.is_spanning_tree()));
}

criterion_group!(
    benches,
    bench_grid_11,
    bench_grid_128,
    bench_grid_500_diagonal,
    bench_index_to_coordinate,
    bench_neighbours_corner_of_grid,
    bench_neighbours_middle_of_grid,
    bench_dead_ends_128,
    bench_is_spanning_tree_128
);
criterion_main!(benches);
