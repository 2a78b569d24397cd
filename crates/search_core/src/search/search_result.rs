//! The outcome record every strategy produces.

use std::fmt;

use crate::constants::Cost;
use crate::search::Method;

/// Result of a single query.
///
/// `explored` counts cities ever added to a frontier or recursion, once
/// per addition. `expanded` counts cities popped for neighbor generation.
/// `maintained` counts the pending work left over at the moment a result
/// was found. `explored >= expanded` holds for every result.
///
/// Created once per query, filled in by the owning strategy call, and
/// never touched again after it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub method: Method,
    pub start: String,
    pub target: String,
    pub success: bool,
    /// City names from start to target. Empty when the search failed.
    pub path: Vec<String>,
    pub cost: Cost,
    pub explored: usize,
    pub expanded: usize,
    pub maintained: usize,
}

impl SearchResult {
    pub fn new(method: Method, start: &str, target: &str) -> Self {
        SearchResult {
            method,
            start: start.to_string(),
            target: target.to_string(),
            success: false,
            path: Vec::new(),
            cost: 0,
            explored: 0,
            expanded: 0,
            maintained: 0,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> {}", self.start, self.target)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(
            f,
            "Result: {}",
            if self.success { "Success" } else { "Failure" }
        )?;
        // A failed search has no path; the join renders it as nothing.
        writeln!(f, "Path: {}", self.path.join(", "))?;
        writeln!(f, "Cost: {}", self.cost)?;
        writeln!(f, "Explored: {}", self.explored)?;
        writeln!(f, "Expanded: {}", self.expanded)?;
        write!(f, "Maintained: {}", self.maintained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_successful_result() {
        let mut result = SearchResult::new(Method::Ucs, "a", "c");
        result.success = true;
        result.path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        result.cost = 5;
        result.explored = 3;
        result.expanded = 3;

        assert_eq!(
            result.to_string(),
            "a -> c\n\
             Method: ucs\n\
             Result: Success\n\
             Path: a, b, c\n\
             Cost: 5\n\
             Explored: 3\n\
             Expanded: 3\n\
             Maintained: 0"
        );
    }

    #[test]
    fn renders_a_failure_without_a_path() {
        let mut result = SearchResult::new(Method::Bfs, "a", "z");
        result.explored = 4;
        result.expanded = 4;

        assert_eq!(
            result.to_string(),
            "a -> z\n\
             Method: bfs\n\
             Result: Failure\n\
             Path: \n\
             Cost: 0\n\
             Explored: 4\n\
             Expanded: 4\n\
             Maintained: 0"
        );
    }
}
