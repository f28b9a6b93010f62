use std::fmt::Display;

use super::*;

fn join_rows<T>(
    grid: &Grid<T>,
    (open, close): (&str, &str),
    cell: impl Fn(&T) -> String,
) -> String {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(&cell).collect();
            format!("{open}{}{close}", cells.join(", "))
        })
        .collect();
    format!("{open}{}{close}", rows.join(", "))
}

/// Renders a grid as a brace literal, the way datasets are described in
/// failure reports.
///
/// # Examples
///
/// ```rust
/// use gridstat::{debug, make_grid};
///
/// assert_eq!(debug::dataset_literal(&make_grid![[1, 2, 3], [4, 5, 6]]), "{{1, 2, 3}, {4, 5, 6}}");
/// ```
pub fn dataset_literal<T: Display>(grid: &Grid<T>) -> String {
    join_rows(grid, ("{", "}"), ToString::to_string)
}

/// Renders a grid as nested brackets, e.g. `[[1, 9, 3], [9, 4, 9]]`.
///
/// # Examples
///
/// ```rust
/// use gridstat::{debug, Grid};
///
/// assert_eq!(debug::deep_to_string(&Grid::from(vec![vec![5], vec![]])), "[[5], []]");
/// assert_eq!(debug::deep_to_string(&Grid::<i32>::empty()), "[]");
/// ```
pub fn deep_to_string<T: Display>(grid: &Grid<T>) -> String {
    join_rows(grid, ("[", "]"), ToString::to_string)
}

/// Lists every person row-major as `Name(score)`.
pub fn person_listing(grid: &Grid<Person>) -> String {
    listing(grid, ToString::to_string)
}

/// Lists every person's name row-major.
pub fn name_listing(grid: &Grid<Person>) -> String {
    listing(grid, |person| person.name().to_owned())
}

fn listing(grid: &Grid<Person>, render: impl Fn(&Person) -> String) -> String {
    grid.cells().map(render).collect::<Vec<_>>().join(", ")
}
