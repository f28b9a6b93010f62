use crate::{GridError, DEFAULT_SMALLVEC_SIZE};
use smallvec::SmallVec;
use tracing::*;

mod components;
mod config;

pub use components::Person;
pub use config::AnalysisConfig;

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// A row-major two-dimensional collection.
///
/// Grids are nominally rectangular. [`Grid::new`] enforces that, while
/// `From<Vec<Vec<T>>>` accepts rows as they come, ragged or not.
///
/// # Example
/// ```
/// use gridstat::Grid;
///
/// let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 3);
/// assert_eq!(grid.cells().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    rows: Vec<SmallVecLine<T>>,
}

impl<T> Grid<T> {
    /// Creates a rectangular grid, rejecting rows whose length differs from
    /// the first row.
    ///
    /// # Example
    /// ```
    /// use gridstat::{Grid, GridError};
    ///
    /// let err = Grid::new(vec![vec![1, 2], vec![3]]).unwrap_err();
    /// assert_eq!(err, GridError::Ragged { row: 1, expected: 2, found: 1 });
    /// ```
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        if let Some(expected) = rows.first().map(Vec::len) {
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                error!("Ragged grid: row {} has {} cells, expected {}", row, found, expected);
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self::from(rows))
    }

    /// Creates a grid with no rows.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns an iterator over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Returns the row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        self.rows.get(index).map(|row| row.as_slice())
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the first row, or 0 for a grid with no rows.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Returns the total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Returns `true` if the grid holds no cells, whether it has no rows or
    /// only empty ones.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Returns `true` if every row has the length of the first row.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Returns a row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Returns a row-major iterator over mutable references to every cell.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a grid from nested rows without checking that they line up.
impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self {
            rows: rows.into_iter().map(SmallVecLine::from_vec).collect(),
        }
    }
}

impl<T> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
