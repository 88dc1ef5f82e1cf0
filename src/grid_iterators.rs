use crate::units::{ColumnsCount, RowsCount};

/// Row-major iteration over every cell index of a grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(cells_count: usize) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count,
        }
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let index = self.current_cell_number;
            self.current_cell_number += 1;
            Some(index)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchIterType {
    Row,
    Column,
}

/// Iteration over whole rows (west to east) or whole columns (north to south) of cell indices.
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl BatchIter {
    pub(crate) fn new(iter_type: BatchIterType, rows: RowsCount, columns: ColumnsCount) -> BatchIter {
        BatchIter {
            iter_type,
            current_index: 0,
            rows,
            columns,
        }
    }

    fn batches_count(&self) -> usize {
        match self.iter_type {
            BatchIterType::Row => self.rows.0,
            BatchIterType::Column => self.columns.0,
        }
    }
}

impl ExactSizeIterator for BatchIter {} // default impl using size_hint()
impl Iterator for BatchIter {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.batches_count() {
            return None;
        }

        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        let current = self.current_index;
        let indices = match self.iter_type {
            BatchIterType::Row => (0..columns).map(|column| current * columns + column).collect(),
            BatchIterType::Column => (0..rows).map(|row| row * columns + current).collect(),
        };
        self.current_index += 1;
        Some(indices)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.batches_count() - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn cell_iter_is_row_major() {
        let iter = CellIter::new(4);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn row_batches() {
        let iter = BatchIter::new(BatchIterType::Row, RowsCount(2), ColumnsCount(3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn column_batches() {
        let iter = BatchIter::new(BatchIterType::Column, RowsCount(2), ColumnsCount(3));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
    }
}
