use crate::{Grid, GridError, Person, DEFAULT_PASS_MARK};
use tracing::*;

/// Counts the persons scoring at least the default pass mark of 60.
///
/// # Example
/// ```
/// use gridstat::{count_passing, Grid, Person};
///
/// let grid = Grid::from(vec![
///     vec![Person::new("Alice", 75), Person::new("Bob", 55)],
///     vec![Person::new("Charlie", 90), Person::new("Diana", 60)],
/// ]);
/// assert_eq!(count_passing(&grid), 3);
/// ```
pub fn count_passing(grid: &Grid<Person>) -> usize {
    count_passing_with(grid, DEFAULT_PASS_MARK)
}

/// Counts the persons whose score is `>= pass_mark`.
pub fn count_passing_with(grid: &Grid<Person>, pass_mark: i32) -> usize {
    trace!("Counting passing scores with pass mark {}", pass_mark);
    grid.cells()
        .filter(|person| person.score() >= pass_mark)
        .count()
}

/// Returns the mean score, or [`GridError::EmptyGrid`] when there is nobody to
/// average.
///
/// # Example
/// ```
/// use gridstat::{average_grade, Grid, GridError, Person};
///
/// let grid = Grid::from(vec![
///     vec![Person::new("Alice", 80), Person::new("Bob", 70)],
///     vec![Person::new("Charlie", 90), Person::new("Diana", 60)],
/// ]);
/// assert_eq!(average_grade(&grid), Ok(75.0));
/// assert_eq!(average_grade(&Grid::empty()), Err(GridError::EmptyGrid));
/// ```
pub fn average_grade(grid: &Grid<Person>) -> Result<f64, GridError> {
    trace!("Averaging grades over {} cells", grid.cell_count());
    let (sum, count) = grid.cells().fold((0i64, 0usize), |(sum, count), person| {
        (sum + i64::from(person.score()), count + 1)
    });
    if count == 0 {
        warn!("Cannot average grades of an empty grid");
        return Err(GridError::EmptyGrid);
    }
    Ok(sum as f64 / count as f64)
}

/// Returns the person with the shortest name, scanning row-major.
///
/// The running best is only replaced on a strictly shorter name, so ties keep
/// the earliest person.
///
/// # Example
/// ```
/// use gridstat::{find_shortest_name, Grid, Person};
///
/// let grid = Grid::from(vec![
///     vec![Person::new("Eve", 95), Person::new("Ian", 92)],
///     vec![Person::new("Dan", 88), Person::new("Amy", 100)],
/// ]);
/// assert_eq!(find_shortest_name(&grid).map(Person::name), Some("Eve"));
/// assert_eq!(find_shortest_name(&Grid::empty()), None);
/// ```
pub fn find_shortest_name(grid: &Grid<Person>) -> Option<&Person> {
    trace!("Finding shortest name over {} cells", grid.cell_count());
    let mut best: Option<(&Person, usize)> = None;
    for person in grid.cells() {
        let len = person.name_len();
        match best {
            Some((_, best_len)) if len >= best_len => {}
            _ => best = Some((person, len)),
        }
    }
    best.map(|(person, _)| person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn people(rows: &[&[(&str, i32)]]) -> Grid<Person> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&(name, score)| Person::new(name, score))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn arb_people() -> impl Strategy<Value = Grid<Person>> {
        (0..6usize, 0..6usize).prop_flat_map(|(rows, columns)| {
            prop::collection::vec(
                prop::collection::vec(
                    ("[a-z]{0,8}", 0..=100i32).prop_map(|(name, score)| Person::new(name, score)),
                    columns,
                ),
                rows,
            )
            .prop_map(Grid::from)
        })
    }

    #[test_case(&[&[("Alice", 75), ("Bob", 55)], &[("Charlie", 90), ("Diana", 60)]], 3 ; "mixed")]
    #[test_case(&[&[("Eve", 80), ("Frank", 70)], &[("Grace", 85), ("Henry", 65)]], 4 ; "all passing")]
    #[test_case(&[&[("Ian", 50), ("Jade", 45)], &[("Kevin", 55), ("Liam", 40)]], 0 ; "none passing")]
    #[test_case(&[&[("Pat", 59), ("Sam", 60)]], 1 ; "boundary is inclusive")]
    #[test_case(&[], 0 ; "no rows")]
    fn test_count_passing(rows: &[&[(&str, i32)]], expected: usize) {
        assert_eq!(count_passing(&people(rows)), expected);
    }

    #[test]
    fn test_count_passing_with_custom_mark() {
        let grid = people(&[&[("Alice", 75), ("Bob", 55)], &[("Charlie", 90), ("Diana", 60)]]);
        assert_eq!(count_passing_with(&grid, 80), 1);
        assert_eq!(count_passing_with(&grid, 0), 4);
    }

    #[test_case(&[&[("Alice", 80), ("Bob", 70)], &[("Charlie", 90), ("Diana", 60)]], 75.0 ; "mixed")]
    #[test_case(&[&[("Eve", 95), ("Frank", 92)], &[("Grace", 88), ("Henry", 100)]], 93.75 ; "high")]
    #[test_case(&[&[("Ian", 50), ("Jade", 45)], &[("Kevin", 55), ("Liam", 40)]], 47.5 ; "low")]
    fn test_average_grade(rows: &[&[(&str, i32)]], expected: f64) {
        assert_eq!(average_grade(&people(rows)), Ok(expected));
    }

    #[test]
    fn test_average_grade_empty_grid() {
        assert_eq!(average_grade(&people(&[])), Err(GridError::EmptyGrid));
        assert_eq!(average_grade(&people(&[&[], &[]])), Err(GridError::EmptyGrid));
    }

    #[test_case(&[&[("Alice", 80), ("Bob", 70)], &[("Christopher", 90), ("Diana", 60)]], "Bob" ; "distinct lengths")]
    #[test_case(&[&[("Eve", 95), ("Ian", 92)], &[("Dan", 88), ("Amy", 100)]], "Eve" ; "tie keeps first")]
    #[test_case(&[&[("Zoe", 50), ("Leonardo", 45)], &[("Kevin", 55), ("Liam", 40)]], "Zoe" ; "first cell shortest")]
    #[test_case(&[&[("Alexander", 1)], &[("Bo", 2), ("Al", 3)]], "Bo" ; "later row wins")]
    fn test_find_shortest_name(rows: &[&[(&str, i32)]], expected: &str) {
        let grid = people(rows);
        assert_eq!(find_shortest_name(&grid).map(Person::name), Some(expected));
    }

    #[test]
    fn test_find_shortest_name_empty_grid() {
        assert_eq!(find_shortest_name(&people(&[])), None);
    }

    proptest! {
        #[test]
        fn test_count_passing_bounded_by_cells(grid in arb_people()) {
            let passing = count_passing(&grid);
            prop_assert!(passing <= grid.cell_count());
            let everyone_passes = grid.cells().all(|person| person.score() >= DEFAULT_PASS_MARK);
            prop_assert_eq!(passing == grid.cell_count(), everyone_passes);
        }

        #[test]
        fn test_average_grade_within_score_range(grid in arb_people()) {
            prop_assume!(!grid.is_empty());
            let average = average_grade(&grid).unwrap();
            let min = grid.cells().map(Person::score).min().unwrap();
            let max = grid.cells().map(Person::score).max().unwrap();
            prop_assert!(f64::from(min) <= average && average <= f64::from(max));
        }

        #[test]
        fn test_find_shortest_name_is_first_minimum(grid in arb_people()) {
            match find_shortest_name(&grid) {
                None => prop_assert!(grid.is_empty()),
                Some(found) => {
                    let shortest = grid.cells().map(Person::name_len).min().unwrap();
                    prop_assert_eq!(found.name_len(), shortest);
                    let first = grid.cells().find(|person| person.name_len() == shortest).unwrap();
                    prop_assert!(std::ptr::eq(found, first));
                }
            }
        }
    }
}
