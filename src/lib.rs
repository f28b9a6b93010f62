//! This crate provides aggregation and search operations over two-dimensional grids
//! of integers and of [`Person`] records, plus a self-check harness that runs fixed
//! scenarios against each operation.

/// Operations over grids of integers.
pub mod analysis;
/// Textual rendering of grids for reports and logs.
///
/// # Example
/// ```
/// use gridstat::{debug, make_grid};
///
/// let grid = make_grid![[1, 2], [3, 4]];
/// assert_eq!(debug::dataset_literal(&grid), "{{1, 2}, {3, 4}}");
/// assert_eq!(debug::deep_to_string(&grid), "[[1, 2], [3, 4]]");
/// ```
pub mod debug;
/// Operations over grids of [`Person`] records.
pub mod grading;
pub mod grid;
pub mod harness;

use thiserror::Error;

pub use analysis::{
    average_of_positives, count_evens, count_odds, search_and_replace, sum_last_column,
};
pub use grading::{average_grade, count_passing, count_passing_with, find_shortest_name};
pub use grid::{AnalysisConfig, Grid, Person, SmallVecLine};
pub use harness::{Operation, OperationReport, SuiteReport};

// Rows of the test datasets rarely exceed a handful of cells
const DEFAULT_SMALLVEC_SIZE: usize = 8;
pub const DEFAULT_PASS_MARK: i32 = 60;
pub const DEFAULT_TOLERANCE: f64 = 0.01;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row} has no last element")]
    EmptyRow { row: usize },

    #[error("Grid contains no cells")]
    EmptyGrid,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Creates a [`Grid`] from bracketed rows of cells.
///
/// Rows are taken as written; use [`Grid::new`] when the shape must be checked.
///
/// # Examples
///
/// ```rust
/// use gridstat::{make_grid, Grid};
///
/// let grid = make_grid![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 3);
///
/// let single_column = make_grid![[5], [10], [15]];
/// assert_eq!(single_column.cell_count(), 3);
///
/// let empty: Grid<i32> = make_grid![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! make_grid {
    () => {
        $crate::Grid::empty()
    };
    ($([$($cell:expr),* $(,)?]),+ $(,)?) => {
        $crate::Grid::from(vec![$(vec![$($cell),*]),+])
    };
}
