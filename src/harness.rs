//! Fixed scenario suites that check each grid operation against literal
//! expectations and report a pass line or a failure block per operation.

use std::{fmt, str::FromStr};

use tracing::*;

use crate::{
    analysis::*, debug, grading::*, make_grid, AnalysisConfig, Grid, GridError, Person,
};

/// The grid operations covered by the self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    CountEvens,
    AverageOfPositives,
    SearchAndReplace,
    SumLastColumn,
    CountPassing,
    AverageGrade,
    FindShortestName,
}

impl Operation {
    /// Every operation, in reporting order.
    pub const ALL: [Operation; 7] = [
        Operation::CountEvens,
        Operation::AverageOfPositives,
        Operation::SearchAndReplace,
        Operation::SumLastColumn,
        Operation::CountPassing,
        Operation::AverageGrade,
        Operation::FindShortestName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::CountEvens => "count_evens",
            Operation::AverageOfPositives => "average_of_positives",
            Operation::SearchAndReplace => "search_and_replace",
            Operation::SumLastColumn => "sum_last_column",
            Operation::CountPassing => "count_passing",
            Operation::AverageGrade => "average_grade",
            Operation::FindShortestName => "find_shortest_name",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a label such as `count_evens` or `count-evens`.
impl FromStr for Operation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().replace('-', "_");
        Operation::ALL
            .into_iter()
            .find(|op| op.label() == label)
            .ok_or_else(|| GridError::UnknownOperation(s.to_owned()))
    }
}

/// A result produced by an operation, or expected of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Grid(Grid<i32>),
    /// The name of the person found, `None` when nobody was.
    Name(Option<String>),
    Failed(GridError),
}

impl Value {
    /// Floats match within `tolerance`; everything else must be equal.
    pub fn matches(&self, actual: &Value, tolerance: f64) -> bool {
        match (self, actual) {
            (Value::Float(expected), Value::Float(actual)) => {
                expected == actual || (actual - expected).abs() < tolerance
            }
            (expected, actual) => expected == actual,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            // Debug keeps the trailing `.0` on whole numbers
            Value::Float(value) => write!(f, "{value:?}"),
            Value::Grid(grid) => f.write_str(&debug::deep_to_string(grid)),
            Value::Name(Some(name)) => f.write_str(name),
            Value::Name(None) => f.write_str("null"),
            Value::Failed(err) => write!(f, "error: {err}"),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Grid<i32>> for Value {
    fn from(grid: Grid<i32>) -> Self {
        Value::Grid(grid)
    }
}

impl From<Option<&Person>> for Value {
    fn from(person: Option<&Person>) -> Self {
        Value::Name(person.map(|person| person.name().to_owned()))
    }
}

impl<T: Into<Value>> From<Result<T, GridError>> for Value {
    fn from(result: Result<T, GridError>) -> Self {
        result.map_or_else(Value::Failed, Into::into)
    }
}

type Run = Box<dyn Fn(&AnalysisConfig) -> Value>;

/// One literal input with its expected result. The operation only runs when
/// the suite reaches the scenario.
pub struct Scenario {
    dataset: String,
    expected: Value,
    run: Run,
}

impl Scenario {
    pub fn new(
        dataset: impl Into<String>,
        expected: impl Into<Value>,
        run: impl Fn(&AnalysisConfig) -> Value + 'static,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            expected: expected.into(),
            run: Box::new(run),
        }
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("dataset", &self.dataset)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// The ordered scenarios for one operation.
#[derive(Debug)]
pub struct Suite {
    operation: Operation,
    scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// The fixed battery of scenarios for `operation`.
    pub fn builtin(operation: Operation) -> Self {
        let suite = Suite::new(operation);
        match operation {
            Operation::CountEvens => suite
                .scenario(integers(make_grid![[2, 3, 4], [5, 6, 7]], 3usize, count_evens))
                .scenario(integers(make_grid![[2, 4, 6], [8, 10, 12]], 6usize, count_evens))
                .scenario(integers(make_grid![[1, 3, 5], [7, 9, 11]], 0usize, count_evens)),
            Operation::AverageOfPositives => suite
                .scenario(integers(
                    make_grid![[-5, 3, -2], [4, 0, 6]],
                    4.33,
                    average_of_positives,
                ))
                .scenario(integers(
                    make_grid![[1, 2, 3], [4, 5, 6]],
                    3.5,
                    average_of_positives,
                ))
                .scenario(integers(
                    make_grid![[-5, -3, -2], [-4, 0, -6]],
                    0.0,
                    average_of_positives,
                )),
            Operation::SearchAndReplace => suite
                .scenario(replacement(
                    make_grid![[1, 2, 3], [2, 4, 2]],
                    (2, 9),
                    make_grid![[1, 9, 3], [9, 4, 9]],
                ))
                .scenario(replacement(
                    make_grid![[1, 2, 3], [4, 5, 6]],
                    (7, 9),
                    make_grid![[1, 2, 3], [4, 5, 6]],
                ))
                .scenario(replacement(
                    make_grid![[5, 5, 5], [5, 5, 5]],
                    (5, 0),
                    make_grid![[0, 0, 0], [0, 0, 0]],
                )),
            Operation::SumLastColumn => suite
                .scenario(integers(
                    make_grid![[1, 2, 3], [4, 5, 6], [7, 8, 9]],
                    18i64,
                    sum_last_column,
                ))
                .scenario(integers(make_grid![[10, 20, 30]], 30i64, sum_last_column))
                .scenario(integers(make_grid![[5], [10], [15]], 30i64, sum_last_column)),
            Operation::CountPassing => suite
                .scenario(passing(
                    &[&[("Alice", 75), ("Bob", 55)], &[("Charlie", 90), ("Diana", 60)]],
                    3,
                ))
                .scenario(passing(
                    &[&[("Eve", 80), ("Frank", 70)], &[("Grace", 85), ("Henry", 65)]],
                    4,
                ))
                .scenario(passing(
                    &[&[("Ian", 50), ("Jade", 45)], &[("Kevin", 55), ("Liam", 40)]],
                    0,
                )),
            Operation::AverageGrade => suite
                .scenario(grades(
                    &[&[("Alice", 80), ("Bob", 70)], &[("Charlie", 90), ("Diana", 60)]],
                    75.0,
                ))
                .scenario(grades(
                    &[&[("Eve", 95), ("Frank", 92)], &[("Grace", 88), ("Henry", 100)]],
                    93.75,
                ))
                .scenario(grades(
                    &[&[("Ian", 50), ("Jade", 45)], &[("Kevin", 55), ("Liam", 40)]],
                    47.5,
                )),
            Operation::FindShortestName => suite
                .scenario(shortest(
                    &[
                        &[("Alice", 80), ("Bob", 70)],
                        &[("Christopher", 90), ("Diana", 60)],
                    ],
                    "Bob",
                ))
                .scenario(shortest(
                    &[&[("Eve", 95), ("Ian", 92)], &[("Dan", 88), ("Amy", 100)]],
                    "Eve",
                ))
                .scenario(shortest(
                    &[&[("Zoe", 50), ("Leonardo", 45)], &[("Kevin", 55), ("Liam", 40)]],
                    "Zoe",
                )),
        }
    }

    /// Runs the scenarios in order, stopping at the first mismatch.
    pub fn run(&self, config: &AnalysisConfig) -> OperationReport {
        for (index, scenario) in self.scenarios.iter().enumerate() {
            let actual = (scenario.run)(config);
            debug!(
                "{} scenario {}: expected={}, got={}",
                self.operation, index, scenario.expected, actual
            );
            if !scenario.expected.matches(&actual, config.tolerance) {
                warn!("{} failed on dataset {}", self.operation, scenario.dataset);
                return OperationReport {
                    operation: self.operation,
                    failure: Some(Failure {
                        dataset: scenario.dataset.clone(),
                        expected: scenario.expected.to_string(),
                        actual: actual.to_string(),
                    }),
                };
            }
        }
        OperationReport {
            operation: self.operation,
            failure: None,
        }
    }
}

fn integers<R: Into<Value> + 'static>(
    grid: Grid<i32>,
    expected: impl Into<Value>,
    op: fn(&Grid<i32>) -> R,
) -> Scenario {
    Scenario::new(debug::dataset_literal(&grid), expected, move |_| {
        op(&grid).into()
    })
}

fn replacement(grid: Grid<i32>, (target, with): (i32, i32), expected: Grid<i32>) -> Scenario {
    let dataset = format!(
        "{}, replace {} with {}",
        debug::dataset_literal(&grid),
        target,
        with
    );
    Scenario::new(dataset, expected, move |_| {
        let mut grid = grid.clone();
        search_and_replace(&mut grid, target, with);
        grid.into()
    })
}

fn people(rows: &[&[(&str, i32)]]) -> Grid<Person> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&(name, score)| Person::new(name, score))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn passing(rows: &[&[(&str, i32)]], expected: usize) -> Scenario {
    let grid = people(rows);
    Scenario::new(debug::person_listing(&grid), expected, move |config| {
        count_passing_with(&grid, config.pass_mark).into()
    })
}

fn grades(rows: &[&[(&str, i32)]], expected: f64) -> Scenario {
    let grid = people(rows);
    Scenario::new(debug::person_listing(&grid), expected, move |_| {
        average_grade(&grid).into()
    })
}

fn shortest(rows: &[&[(&str, i32)]], expected: &str) -> Scenario {
    let grid = people(rows);
    Scenario::new(
        debug::name_listing(&grid),
        Value::Name(Some(expected.to_owned())),
        move |_| find_shortest_name(&grid).into(),
    )
}

/// The first mismatch of a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    pub dataset: String,
    pub expected: String,
    pub actual: String,
}

/// The outcome of one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperationReport {
    pub operation: Operation,
    pub failure: Option<Failure>,
}

impl OperationReport {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl fmt::Display for OperationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "{} passed", self.operation),
            Some(failure) => {
                writeln!(f, "======{} failed======", self.operation)?;
                writeln!(f, "Test dataset: {}", failure.dataset)?;
                writeln!(f, "Expected: {}", failure.expected)?;
                write!(f, "Got: {}", failure.actual)
            }
        }
    }
}

/// The outcomes of every suite run, in [`Operation::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SuiteReport {
    pub reports: Vec<OperationReport>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(OperationReport::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &OperationReport> {
        self.reports.iter().filter(|report| !report.passed())
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, report) in self.reports.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{report}")?;
        }
        Ok(())
    }
}

/// Runs every built-in suite.
///
/// # Example
/// ```
/// use gridstat::{harness, AnalysisConfig};
///
/// let report = harness::run_all(&AnalysisConfig::default());
/// assert!(report.all_passed());
/// assert_eq!(report.reports[0].to_string(), "count_evens passed");
/// ```
pub fn run_all(config: &AnalysisConfig) -> SuiteReport {
    run_operations(&Operation::ALL, config)
}

/// Runs the built-in suites of `operations`, deduplicated and in
/// [`Operation::ALL`] order.
pub fn run_operations(operations: &[Operation], config: &AnalysisConfig) -> SuiteReport {
    let mut operations = operations.to_vec();
    operations.sort();
    operations.dedup();
    info!("Running {} suites", operations.len());
    SuiteReport {
        reports: operations
            .into_iter()
            .map(|operation| Suite::builtin(operation).run(config))
            .collect(),
    }
}
