//! GoalStore - ordered in-memory goal list
//!
//! Owns the goal records behind the goal list screen. Records are created
//! only by [`GoalStore::add`] (which validates the text) and destroyed only by
//! [`GoalStore::remove`]. There is no update-in-place and no persistence.
//!
//! # Example
//!
//! ```
//! use goalstore::{GoalError, GoalStore};
//!
//! let mut store = GoalStore::new();
//! let id = store.add("Buy milk").unwrap().id.clone();
//! assert!(matches!(store.add("   "), Err(GoalError::EmptyGoal)));
//! assert_eq!(store.len(), 1);
//!
//! store.remove(&id);
//! assert!(store.is_empty());
//! ```

mod error;
mod goal;
mod id;
mod store;

pub use error::GoalError;
pub use goal::{Goal, TextMode, validate_goal_text};
pub use id::GoalId;
pub use store::GoalStore;
