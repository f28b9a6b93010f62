use std::fmt;

/// A named score, the cell type of the grading operations.
///
/// # Example
/// ```
/// use gridstat::Person;
///
/// let person = Person::new("Diana", 60);
/// assert_eq!(person.name(), "Diana");
/// assert_eq!(person.score(), 60);
/// assert_eq!(person.to_string(), "Diana(60)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Person {
    name: String,
    score: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Length of the name in Unicode scalar values.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.score)
    }
}
