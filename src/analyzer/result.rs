use std::fmt;

use super::error::AnalysisError;

/// Outcome of analyzing one game text: either the number of turns accepted,
/// or the message describing the first problem found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    valid: bool,
    error_message: String,
    turn_count: usize,
}

impl AnalysisResult {
    pub fn success(turn_count: usize) -> Self {
        Self {
            valid: true,
            error_message: String::new(),
            turn_count,
        }
    }

    pub fn failure<S: Into<String>>(error_message: S) -> Self {
        Self {
            valid: false,
            error_message: error_message.into(),
            turn_count: 0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Empty when the game is valid.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Zero when the game is invalid.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }
}

impl From<Result<usize, AnalysisError>> for AnalysisResult {
    fn from(result: Result<usize, AnalysisError>) -> Self {
        match result {
            Ok(turn_count) => Self::success(turn_count),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "valid, {} turns", self.turn_count)
        } else {
            write!(f, "{}", self.error_message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_message() {
        let result = AnalysisResult::success(3);
        assert!(result.is_valid());
        assert_eq!(result.error_message(), "");
        assert_eq!(result.turn_count(), 3);
        assert_eq!(result.to_string(), "valid, 3 turns");
    }

    #[test]
    fn test_failure_has_no_turns() {
        let result = AnalysisResult::from(Err(AnalysisError::MissingWhiteMove { number: 4 }));
        assert!(!result.is_valid());
        assert_eq!(result.turn_count(), 0);
        assert_eq!(result.error_message(), "missing white half-move in turn 4");
        assert_eq!(result.to_string(), "missing white half-move in turn 4");
    }
}
