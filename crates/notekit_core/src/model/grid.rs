//! Grid (spreadsheet) sub-model.
//!
//! # Responsibility
//! - Hold a fixed `rows x cols` matrix of text cells.
//! - Provide bounds-checked single-cell reads and writes.
//!
//! # Invariants
//! - Dimensions are fixed at construction; every row has exactly `cols` cells.
//! - `set_cell` rebuilds only the touched row; other rows are shared by `Arc`.
//! - Out-of-range access is a caller bug and returns `GridError::InvalidIndex`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Default row count for new grids.
pub const DEFAULT_GRID_ROWS: usize = 10;
/// Default column count for new grids.
pub const DEFAULT_GRID_COLS: usize = 5;

/// Errors from grid cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Cell index lies outside the constructed bounds.
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "grid cell ({row}, {col}) is outside bounds {rows}x{cols}"
            ),
        }
    }
}

impl Error for GridError {}

/// Fixed-size matrix of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    cols: usize,
    cells: Vec<Arc<Vec<String>>>,
}

impl GridModel {
    /// Creates an empty grid where every cell is `""`.
    ///
    /// A grid without rows has no columns either, so `new(0, n)` is `0x0`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        let empty_row = Arc::new(vec![String::new(); cols]);
        Self {
            cols,
            cells: (0..rows).map(|_| Arc::clone(&empty_row)).collect(),
        }
    }

    /// Builds a grid from stored rows.
    ///
    /// Short rows are padded with empty cells up to the widest row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, String::new());
                Arc::new(row)
            })
            .collect();
        Self { cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether no cell holds any text.
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Reads one cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<&str, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].as_str())
    }

    /// Returns one row as a slice, or `None` when out of range.
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.cells.get(row).map(|cells| cells.as_slice())
    }

    /// Returns a new grid with exactly one cell replaced.
    ///
    /// # Errors
    /// - `GridError::InvalidIndex` when `(row, col)` is outside the grid.
    pub fn set_cell(
        &self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<Self, GridError> {
        self.check_bounds(row, col)?;

        let mut next = self.clone();
        let mut rebuilt = next.cells[row].to_vec();
        rebuilt[col] = value.into();
        next.cells[row] = Arc::new(rebuilt);
        Ok(next)
    }

    /// Copies the grid out as plain nested rows.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Returns whether `row` is the same allocation in both grids.
    pub fn shares_row_with(&self, other: &GridModel, row: usize) -> bool {
        match (self.cells.get(row), other.cells.get(row)) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows() || col >= self.cols {
            return Err(GridError::InvalidIndex {
                row,
                col,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridError, GridModel};

    #[test]
    fn default_grid_is_ten_by_five_and_blank() {
        let grid = GridModel::default();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 5);
        assert!(grid.is_blank());
    }

    #[test]
    fn from_rows_pads_ragged_rows() {
        let grid = GridModel::from_rows(vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string(), "d".to_string()],
        ]);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(0, 2).unwrap(), "");
        assert_eq!(grid.cell(1, 2).unwrap(), "d");
    }

    #[test]
    fn cell_out_of_range_reports_bounds() {
        let grid = GridModel::new(2, 2);
        let err = grid.cell(2, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidIndex {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(err.to_string().contains("outside bounds 2x2"));
    }

    #[test]
    fn grid_without_rows_has_no_columns() {
        let grid = GridModel::new(0, 5);
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
        assert_eq!(grid, GridModel::from_rows(Vec::new()));
    }
}
