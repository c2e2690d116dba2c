//! Goal ID generation
//!
//! Ids are UUIDv7 strings. Generation is monotonic within a process, so ids
//! issued during one session never repeat.

use std::fmt;

/// Opaque, unique identity of a goal record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoalId(String);

impl GoalId {
    /// Generate a fresh id
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the full ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing 8 characters, for log lines
    ///
    /// The leading part of a v7 id is a timestamp shared by ids generated in
    /// the same millisecond, so the tail is the distinguishing part.
    pub fn short(&self) -> &str {
        self.0
            .char_indices()
            .rev()
            .nth(7)
            .map_or(self.0.as_str(), |(start, _)| &self.0[start..])
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for GoalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
