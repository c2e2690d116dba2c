//! Goal record and text validation

use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::id::GoalId;

/// A single committed goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// Sole identity used for lookup and removal
    pub id: GoalId,
    /// Goal text, non-empty after trimming
    pub text: String,
}

impl Goal {
    /// Build a record from already-validated text
    pub(crate) fn new(id: GoalId, text: String) -> Self {
        Self { id, text }
    }
}

/// What text is stored once validation passes
///
/// Validation always checks the trimmed text. `Raw` keeps the submission
/// verbatim, surrounding whitespace included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMode {
    #[default]
    Trimmed,
    Raw,
}

impl TextMode {
    /// Text to store for a submission that passed validation
    pub fn stored_text(self, submitted: &str) -> String {
        match self {
            Self::Trimmed => submitted.trim().to_string(),
            Self::Raw => submitted.to_string(),
        }
    }
}

/// Check that text is non-empty after trimming, returning the trimmed form
pub fn validate_goal_text(text: &str) -> Result<&str, GoalError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GoalError::EmptyGoal);
    }
    Ok(trimmed)
}
