//! Goal store error types

use thiserror::Error;

/// Errors raised by goal store transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// Submitted text was empty or whitespace-only
    #[error("Empty goal: please type something before adding")]
    EmptyGoal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_goal_message() {
        let msg = GoalError::EmptyGoal.to_string();
        assert!(msg.contains("Empty goal"));
        assert!(msg.contains("type something"));
    }
}
