use crate::{DEFAULT_PASS_MARK, DEFAULT_TOLERANCE};

/// Configuration for grading and for comparing floating-point results.
///
/// # Example
/// ```
/// use gridstat::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.pass_mark, 60);
/// assert_eq!(config.tolerance, 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Lowest score that counts as passing, inclusive (default: 60)
    pub pass_mark: i32,
    /// Absolute tolerance for float comparisons (default: 0.01)
    pub tolerance: f64,
}

impl AnalysisConfig {
    /// Creates a new `AnalysisConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use gridstat::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::new(50, -1.0);
    /// assert_eq!(config.pass_mark, 50);
    /// assert_eq!(config.tolerance, 0.0);
    /// ```
    pub fn new(pass_mark: i32, tolerance: f64) -> Self {
        Self {
            pass_mark,
            tolerance: tolerance.max(0.0), // Negative or NaN tolerance collapses to exact
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig::new(DEFAULT_PASS_MARK, DEFAULT_TOLERANCE)
    }
}
