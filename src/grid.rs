use error_chain::bail;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use std::ops::Index;

use crate::cells::{Cell, CellIndexSmallVec, Coordinate, Direction, DirectionMap};
use crate::errors::*;
use crate::grid_iterators::{BatchIter, BatchIterType, CellIter};
use crate::units::{ColumnsCount, RowsCount};

/// A `rows` x `columns` arena of cells addressed by row-major index.
///
/// The edge table is only changed by `reset_edges`, the maze generators only ever touch paths.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<Cell>,
    orthogonal: bool,
    diagonal: bool,
}

impl Grid {
    /// A grid with no edges and no paths. Call `reset_edges` before generating a maze.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        if rows_count == 0 || columns_count == 0 {
            bail!(ErrorKind::InvalidDimensions(rows_count, columns_count));
        }
        let size = rows_count
            .checked_mul(columns_count)
            .ok_or(ErrorKind::InvalidDimensions(rows_count, columns_count))?;

        let cells = (0..size)
            .map(|index| {
                Cell::new(Coordinate::new(index / columns_count, index % columns_count), index)
            })
            .collect();

        Ok(Grid {
            rows,
            columns,
            cells,
            orthogonal: false,
            diagonal: false,
        })
    }

    pub fn with_edges(rows: RowsCount,
                      columns: ColumnsCount,
                      orthogonal: bool,
                      diagonal: bool)
                      -> Result<Grid> {
        let mut grid = Grid::new(rows, columns)?;
        grid.reset_edges(orthogonal, diagonal);
        Ok(grid)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn has_orthogonal_edges(&self) -> bool {
        self.orthogonal
    }

    #[inline]
    pub fn has_diagonal_edges(&self) -> bool {
        self.diagonal
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..grid.size().
    pub fn index_of(&self, coord: Coordinate) -> Result<usize> {
        if coord.row < self.rows.0 && coord.column < self.columns.0 {
            Ok(coord.row * self.columns.0 + coord.column)
        } else {
            bail!(ErrorKind::CellOutOfBounds(coord.row, coord.column))
        }
    }

    pub fn coordinate_of(&self, index: usize) -> Result<Coordinate> {
        self.cell_at(index).map(Cell::coordinate)
    }

    pub fn cell(&self, coord: Coordinate) -> Result<&Cell> {
        let index = self.index_of(coord)?;
        Ok(&self.cells[index])
    }

    pub fn cell_at(&self, index: usize) -> Result<&Cell> {
        self.cells
            .get(index)
            .ok_or_else(|| ErrorKind::IndexOutOfBounds(index, self.size()).into())
    }

    #[inline]
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.size())
    }

    /// Rebuild the physical adjacency of every cell. No edge crosses the grid boundary.
    /// Paths that are no longer backed by an edge are dropped.
    pub fn reset_edges(&mut self, orthogonal: bool, diagonal: bool) {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        let directions = Direction::ALL
            .iter()
            .cloned()
            .filter(|dir| if dir.is_diagonal() { diagonal } else { orthogonal })
            .collect::<Vec<_>>();

        for cell in &mut self.cells {
            let mut edges = DirectionMap::new();
            for &dir in &directions {
                if let Some(neighbour) = cell.coordinate().offset(dir) {
                    if neighbour.row < rows && neighbour.column < columns {
                        let _ = edges.insert(dir, neighbour.row * columns + neighbour.column);
                    }
                }
            }

            for dir in cell.paths.directions() {
                if cell.paths.get(dir) != edges.get(dir) {
                    let _ = cell.paths.remove(dir);
                }
            }
            cell.edges = edges;
        }

        self.orthogonal = orthogonal;
        self.diagonal = diagonal;
    }

    /// Clear every path, or when `as_connected` carve a path along every edge.
    pub fn reset_paths(&mut self, as_connected: bool) {
        for cell in &mut self.cells {
            if as_connected {
                cell.paths = cell.edges;
            } else {
                cell.paths.clear();
            }
        }
    }

    /// Carve a path from `a` to `b`, and back again if `bidirectional`.
    /// Returns `b` so callers can chain onto the newly reached cell.
    ///
    /// Fails with `NotAdjacent` if there is no edge between the cells in the required
    /// direction(s). Nothing is carved when it fails.
    pub fn connect_path(&mut self, a: usize, b: usize, bidirectional: bool) -> Result<usize> {
        let forward = self.edge_direction(a, b)?;
        if bidirectional {
            let backward = self.edge_direction(b, a)?;
            let _ = self.cells[b].paths.insert(backward, a);
        }
        let _ = self.cells[a].paths.insert(forward, b);
        Ok(b)
    }

    /// Remove the path from `a` to `b`, and back again if `bidirectional`.
    /// Removing a path that was never carved is not an error, removing one with no edge is.
    pub fn disconnect_path(&mut self, a: usize, b: usize, bidirectional: bool) -> Result<()> {
        let forward = self.edge_direction(a, b)?;
        if bidirectional {
            let backward = self.edge_direction(b, a)?;
            let _ = self.cells[b].paths.remove(backward);
        }
        let _ = self.cells[a].paths.remove(forward);
        Ok(())
    }

    /// Is there a carved path between two cells, in either direction?
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        match (self.cells.get(a), self.cells.get(b)) {
            (Some(cell_a), Some(cell_b)) => {
                cell_a.paths.direction_of(b).is_some() || cell_b.paths.direction_of(a).is_some()
            }
            _ => false,
        }
    }

    /// Cells sharing an edge with `index`, linked by a path or not.
    ///
    /// Panics if `index` is not within the grid, as do the other neighbour queries.
    pub fn neighbours(&self, index: usize) -> CellIndexSmallVec {
        self.cells[index].edges.cells()
    }

    pub fn neighbour_at_direction(&self, index: usize, dir: Direction) -> Option<usize> {
        self.cells[index].edges.get(dir)
    }

    /// Neighbours that have not had any path carved to or from them yet: unvisited cells.
    pub fn neighbours_without_paths(&self, index: usize) -> CellIndexSmallVec {
        self.neighbours(index)
            .into_iter()
            .filter(|&neighbour| self.cells[neighbour].paths.is_empty())
            .collect()
    }

    /// Neighbours that already have at least one path: visited cells.
    pub fn neighbours_with_paths(&self, index: usize) -> CellIndexSmallVec {
        self.neighbours(index)
            .into_iter()
            .filter(|&neighbour| !self.cells[neighbour].paths.is_empty())
            .collect()
    }

    /// Neighbours along edges of `index` that have no path carved from `index`.
    pub fn uncarved_neighbours(&self, index: usize) -> CellIndexSmallVec {
        let cell = &self.cells[index];
        cell.edges
            .iter()
            .filter(|&(dir, _)| !cell.paths.contains(dir))
            .map(|(_, neighbour)| neighbour)
            .collect()
    }

    pub fn carved_neighbours(&self, index: usize) -> CellIndexSmallVec {
        self.cells[index].paths.cells()
    }

    /// Cells with exactly one path.
    pub fn dead_ends(&self) -> Vec<usize> {
        self.cells.iter().filter(|cell| cell.is_dead_end()).map(Cell::index).collect()
    }

    pub fn cells_with_paths(&self) -> Vec<usize> {
        self.cells.iter().filter(|cell| !cell.paths.is_empty()).map(Cell::index).collect()
    }

    pub fn cells_without_paths(&self) -> Vec<usize> {
        self.cells.iter().filter(|cell| cell.paths.is_empty()).map(Cell::index).collect()
    }

    /// Number of undirected passages: a pair of cells counts once however it was carved.
    pub fn path_count(&self) -> usize {
        self.undirected_pairs(|cell| &cell.paths).len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.undirected_pairs(|cell| &cell.edges).len()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.size())
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Row, self.rows, self.columns)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Column, self.rows, self.columns)
    }

    /// The carved passages as an undirected petgraph graph. Node indices are cell indices.
    pub fn paths_graph(&self) -> UnGraph<(), ()> {
        self.graph_of(|cell| &cell.paths)
    }

    /// Can every cell be reached from every other along carved paths?
    pub fn is_connected(&self) -> bool {
        connected_components(&self.paths_graph()) == 1
    }

    /// Connected and acyclic: a perfect maze.
    pub fn is_spanning_tree(&self) -> bool {
        self.path_count() == self.size() - 1 && self.is_connected()
    }

    /// Could a spanning maze be carved over the current edge table at all?
    pub fn is_edge_connected(&self) -> bool {
        connected_components(&self.graph_of(|cell| &cell.edges)) == 1
    }

    fn edge_direction(&self, from: usize, to: usize) -> Result<Direction> {
        let from_cell = self.cell_at(from)?;
        let _ = self.cell_at(to)?;
        Ok(from_cell.edges.direction_of(to).ok_or(ErrorKind::NotAdjacent(from, to))?)
    }

    fn undirected_pairs<F>(&self, links: F) -> Vec<(usize, usize)>
        where F: Fn(&Cell) -> &DirectionMap
    {
        let mut pairs = vec![];
        for cell in &self.cells {
            let a = cell.index();
            for (_, b) in links(cell).iter() {
                // one-way links count once, from whichever end holds them
                if a < b || links(&self.cells[b]).direction_of(a).is_none() {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    fn graph_of<F>(&self, links: F) -> UnGraph<(), ()>
        where F: Fn(&Cell) -> &DirectionMap
    {
        let pairs = self.undirected_pairs(links);
        let mut graph = UnGraph::with_capacity(self.size(), pairs.len());
        for _ in 0..self.size() {
            let _ = graph.add_node(());
        }
        for (a, b) in pairs {
            let _ = graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        graph
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Cell {
        match self.index_of(coord) {
            Ok(index) => &self.cells[index],
            Err(e) => panic!("{}", e),
        }
    }
}
