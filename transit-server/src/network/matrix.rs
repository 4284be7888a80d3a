//! Dense adjacency and incidence matrices.
//!
//! Both matrices are derived from the connection list and an
//! [`IndexMapping`]. Connections whose endpoints are not in the mapping
//! (stale after a removal without regeneration) are skipped.

use crate::domain::{Connection, Weight};

use super::index::IndexMapping;

/// N×N table of edge weights, row-major. `0` means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Build from the connection list.
    ///
    /// Both `[i][j]` and `[j][i]` receive the connection's weight. Parallel
    /// connections overwrite each other in insertion order, so the last one
    /// wins.
    pub fn build(mapping: &IndexMapping, connections: &[Connection]) -> Self {
        let size = mapping.len();
        let mut cells = vec![0; size * size];

        for conn in connections {
            let (Some(i), Some(j)) = (mapping.index_of(conn.from()), mapping.index_of(conn.to()))
            else {
                continue;
            };
            cells[i * size + j] = conn.weight();
            cells[j * size + i] = conn.weight();
        }

        Self { size, cells }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at `[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Weight {
        assert!(row < self.size && col < self.size, "index out of range");
        self.cells[row * self.size + col]
    }

    /// One row of the matrix.
    pub fn row(&self, row: usize) -> &[Weight] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over all rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Positive-weight neighbours of `row`, in ascending index order.
    pub fn neighbors(&self, row: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(j, &w)| (j, w))
    }

    /// Number of positive-weight entries in `row`.
    ///
    /// Zero-weight connections never count.
    pub fn degree(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&w| w > 0).count()
    }
}

/// N×C table: column `j` holds `+1` at the origin row and `-1` at the
/// destination row of connection `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i8>,
}

impl IncidenceMatrix {
    /// Build from the connection list. Column order is insertion order.
    ///
    /// With no connections this is an N×0 matrix. A stale connection keeps
    /// its column, left all zeros.
    pub fn build(mapping: &IndexMapping, connections: &[Connection]) -> Self {
        let rows = mapping.len();
        let cols = connections.len();
        let mut cells = vec![0; rows * cols];

        for (j, conn) in connections.iter().enumerate() {
            let (Some(origin), Some(dest)) =
                (mapping.index_of(conn.from()), mapping.index_of(conn.to()))
            else {
                continue;
            };
            cells[origin * cols + j] = 1;
            cells[dest * cols + j] = -1;
        }

        Self { rows, cols, cells }
    }

    /// Number of rows (stations).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (connections).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> i8 {
        assert!(row < self.rows && col < self.cols, "index out of range");
        self.cells[row * self.cols + col]
    }

    /// One row of the matrix.
    pub fn row(&self, row: usize) -> &[i8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}
