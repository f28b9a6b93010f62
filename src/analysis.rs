use crate::{Grid, GridError};
use tracing::*;

/// Counts the cells divisible by 2. Zero and negative evens count.
///
/// # Example
/// ```
/// use gridstat::{count_evens, make_grid};
///
/// assert_eq!(count_evens(&make_grid![[2, 3, 4], [5, 6, 7]]), 3);
/// assert_eq!(count_evens(&make_grid![[-2, 0, -1]]), 2);
/// ```
pub fn count_evens(grid: &Grid<i32>) -> usize {
    trace!("Counting evens over {} cells", grid.cell_count());
    grid.cells().filter(|&&value| value % 2 == 0).count()
}

/// Counts the cells not divisible by 2, the complement of [`count_evens`].
pub fn count_odds(grid: &Grid<i32>) -> usize {
    trace!("Counting odds over {} cells", grid.cell_count());
    grid.cells().filter(|&&value| value % 2 != 0).count()
}

/// Returns the mean of the cells strictly greater than zero, or exactly `0.0`
/// when there are none.
///
/// # Example
/// ```
/// use gridstat::{average_of_positives, make_grid};
///
/// let average = average_of_positives(&make_grid![[-5, 3, -2], [4, 0, 6]]);
/// assert!((average - 4.33).abs() < 0.01);
/// assert_eq!(average_of_positives(&make_grid![[-1, 0]]), 0.0);
/// ```
pub fn average_of_positives(grid: &Grid<i32>) -> f64 {
    trace!("Averaging positives over {} cells", grid.cell_count());
    let (sum, count) = grid
        .cells()
        .filter(|&&value| value > 0)
        .fold((0i64, 0usize), |(sum, count), &value| {
            (sum + i64::from(value), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// Overwrites every cell equal to `target` with `replacement`, in place.
///
/// Rows are walked element-wise, so ragged grids are fine. Returns how many
/// cells were overwritten; `target == replacement` touches nothing and
/// returns 0.
///
/// # Example
/// ```
/// use gridstat::{make_grid, search_and_replace};
///
/// let mut grid = make_grid![[1, 2, 3], [2, 4, 2]];
/// search_and_replace(&mut grid, 2, 9);
/// assert_eq!(grid, make_grid![[1, 9, 3], [9, 4, 9]]);
/// ```
pub fn search_and_replace(grid: &mut Grid<i32>, target: i32, replacement: i32) -> usize {
    trace!("Replacing {} with {}", target, replacement);
    if target == replacement {
        return 0;
    }
    let mut replaced = 0;
    for cell in grid.cells_mut().filter(|cell| **cell == target) {
        *cell = replacement;
        replaced += 1;
    }
    debug!("Replaced {} cells", replaced);
    replaced
}

/// Sums the last cell of every row.
///
/// A grid with no rows sums to 0. A row with no cells has no last element and
/// is reported as [`GridError::EmptyRow`].
///
/// # Example
/// ```
/// use gridstat::{make_grid, sum_last_column, Grid, GridError};
///
/// assert_eq!(sum_last_column(&make_grid![[1, 2, 3], [4, 5, 6], [7, 8, 9]]), Ok(18));
///
/// let grid = Grid::from(vec![vec![1], vec![]]);
/// assert_eq!(sum_last_column(&grid), Err(GridError::EmptyRow { row: 1 }));
/// ```
pub fn sum_last_column(grid: &Grid<i32>) -> Result<i64, GridError> {
    trace!("Summing last column over {} rows", grid.row_count());
    grid.rows()
        .enumerate()
        .try_fold(0i64, |sum, (row, cells)| match cells.last() {
            Some(&last) => Ok(sum + i64::from(last)),
            None => {
                warn!("Row {} has no last element", row);
                Err(GridError::EmptyRow { row })
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_grid;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn arb_grid() -> impl Strategy<Value = Grid<i32>> {
        (0..8usize, 0..8usize).prop_flat_map(|(rows, columns)| {
            prop::collection::vec(prop::collection::vec(-20..20i32, columns), rows)
                .prop_map(Grid::from)
        })
    }

    #[test_case(make_grid![[2, 3, 4], [5, 6, 7]], 3 ; "mixed")]
    #[test_case(make_grid![[2, 4, 6], [8, 10, 12]], 6 ; "all even")]
    #[test_case(make_grid![[1, 3, 5], [7, 9, 11]], 0 ; "all odd")]
    #[test_case(make_grid![[-4, -3, 0]], 2 ; "negative and zero")]
    #[test_case(Grid::empty(), 0 ; "no rows")]
    #[test_case(Grid::from(vec![vec![], vec![]]), 0 ; "empty rows")]
    fn test_count_evens(grid: Grid<i32>, expected: usize) {
        assert_eq!(count_evens(&grid), expected);
    }

    #[test_case(make_grid![[-5, 3, -2], [4, 0, 6]], 13.0 / 3.0 ; "mixed")]
    #[test_case(make_grid![[1, 2, 3], [4, 5, 6]], 3.5 ; "all positive")]
    #[test_case(make_grid![[-5, -3, -2], [-4, 0, -6]], 0.0 ; "none positive")]
    #[test_case(Grid::empty(), 0.0 ; "no rows")]
    fn test_average_of_positives(grid: Grid<i32>, expected: f64) {
        assert!((average_of_positives(&grid) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_average_of_positives_large_values_do_not_overflow() {
        let grid = make_grid![[i32::MAX, i32::MAX]];
        assert_eq!(average_of_positives(&grid), f64::from(i32::MAX));
    }

    #[test]
    fn test_search_and_replace_existing_target() {
        let mut grid = make_grid![[1, 2, 3], [2, 4, 2]];
        assert_eq!(search_and_replace(&mut grid, 2, 9), 3);
        assert_eq!(grid, make_grid![[1, 9, 3], [9, 4, 9]]);
    }

    #[test]
    fn test_search_and_replace_missing_target() {
        let mut grid = make_grid![[1, 2, 3], [4, 5, 6]];
        assert_eq!(search_and_replace(&mut grid, 7, 9), 0);
        assert_eq!(grid, make_grid![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_search_and_replace_every_cell() {
        let mut grid = make_grid![[5, 5, 5], [5, 5, 5]];
        search_and_replace(&mut grid, 5, 0);
        assert_eq!(grid, make_grid![[0, 0, 0], [0, 0, 0]]);
    }

    #[test]
    fn test_search_and_replace_ragged_grid() {
        let mut grid = Grid::from(vec![vec![1, 2, 3], vec![2], vec![], vec![4, 2]]);
        search_and_replace(&mut grid, 2, 7);
        assert_eq!(
            grid,
            Grid::from(vec![vec![1, 7, 3], vec![7], vec![], vec![4, 7]])
        );
    }

    #[test_case(make_grid![[1, 2, 3], [4, 5, 6], [7, 8, 9]], 18 ; "square")]
    #[test_case(make_grid![[10, 20, 30]], 30 ; "single row")]
    #[test_case(make_grid![[5], [10], [15]], 30 ; "single column")]
    #[test_case(Grid::empty(), 0 ; "no rows")]
    #[test_case(Grid::from(vec![vec![1, 2], vec![3]]), 5 ; "ragged")]
    fn test_sum_last_column(grid: Grid<i32>, expected: i64) {
        assert_eq!(sum_last_column(&grid), Ok(expected));
    }

    #[test]
    fn test_sum_last_column_rejects_empty_row() {
        let grid: Grid<i32> = Grid::new(vec![vec![], vec![]]).unwrap();
        assert_eq!(sum_last_column(&grid), Err(GridError::EmptyRow { row: 0 }));
    }

    proptest! {
        #[test]
        fn test_evens_and_odds_partition_cells(grid in arb_grid()) {
            prop_assert_eq!(count_evens(&grid) + count_odds(&grid), grid.cell_count());
        }

        #[test]
        fn test_average_of_positives_zero_without_positives(grid in arb_grid()) {
            let grid = Grid::from(
                grid.rows()
                    .map(|row| row.iter().map(|value| -value.abs()).collect())
                    .collect::<Vec<Vec<i32>>>(),
            );
            prop_assert_eq!(average_of_positives(&grid), 0.0);
        }

        #[test]
        fn test_search_and_replace_same_value_is_noop(grid in arb_grid(), value in -20..20i32) {
            let mut replaced = grid.clone();
            prop_assert_eq!(search_and_replace(&mut replaced, value, value), 0);
            prop_assert_eq!(replaced, grid);
        }

        #[test]
        fn test_search_and_replace_postcondition(
            grid in arb_grid(),
            target in -20..20i32,
            replacement in -20..20i32,
        ) {
            prop_assume!(target != replacement);
            let mut replaced = grid.clone();
            search_and_replace(&mut replaced, target, replacement);
            prop_assert!(replaced.cells().all(|&value| value != target));
            for (&before, &after) in grid.cells().zip(replaced.cells()) {
                if after == replacement {
                    prop_assert!(before == replacement || before == target);
                } else {
                    prop_assert_eq!(before, after);
                }
            }
        }

        #[test]
        fn test_sum_last_column_matches_rows(grid in arb_grid()) {
            prop_assume!(grid.column_count() > 0);
            let expected: i64 = grid.rows().map(|row| i64::from(row[row.len() - 1])).sum();
            prop_assert_eq!(sum_last_column(&grid), Ok(expected));
        }
    }
}
