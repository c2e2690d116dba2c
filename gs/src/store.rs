//! Ordered goal store

use tracing::debug;

use crate::error::GoalError;
use crate::goal::{Goal, TextMode, validate_goal_text};
use crate::id::GoalId;

/// Ordered sequence of goal records
///
/// Insertion order is preserved and no two records share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalStore {
    goals: Vec<Goal>,
    text_mode: TextMode,
}

impl GoalStore {
    /// Create an empty store that stores trimmed text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given text mode
    pub fn with_text_mode(text_mode: TextMode) -> Self {
        debug!(?text_mode, "GoalStore::with_text_mode: called");
        Self {
            goals: Vec::new(),
            text_mode,
        }
    }

    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// Validate `text` and append a new goal at the end
    ///
    /// Fails with [`GoalError::EmptyGoal`] without mutating the store when the
    /// trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Result<&Goal, GoalError> {
        debug!(text_len = text.len(), "GoalStore::add: called");
        validate_goal_text(text)?;

        let mut id = GoalId::generate();
        while self.contains(&id) {
            debug!(id = %id.short(), "GoalStore::add: id collision, regenerating");
            id = GoalId::generate();
        }

        self.goals.push(Goal::new(id, self.text_mode.stored_text(text)));
        let goal = &self.goals[self.goals.len() - 1];
        debug!(id = %goal.id.short(), len = self.goals.len(), "GoalStore::add: appended");
        Ok(goal)
    }

    /// Remove the goal with `id`, returning it
    ///
    /// Absent ids leave the store unchanged.
    pub fn remove(&mut self, id: &GoalId) -> Option<Goal> {
        debug!(id = %id.short(), "GoalStore::remove: called");
        match self.position(id) {
            Some(index) => {
                let goal = self.goals.remove(index);
                debug!(index, len = self.goals.len(), "GoalStore::remove: removed");
                Some(goal)
            }
            None => {
                debug!("GoalStore::remove: id not present, no-op");
                None
            }
        }
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    pub fn contains(&self, id: &GoalId) -> bool {
        self.get(id).is_some()
    }

    /// Index of the goal with `id` in display order
    pub fn position(&self, id: &GoalId) -> Option<usize> {
        self.goals.iter().position(|g| &g.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.goals.iter()
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl<'a> IntoIterator for &'a GoalStore {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn texts(store: &GoalStore) -> Vec<&str> {
        store.iter().map(|g| g.text.as_str()).collect()
    }

    fn add_id(store: &mut GoalStore, text: &str) -> GoalId {
        store.add(text).expect("add should succeed").id.clone()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = GoalStore::new();
        add_id(&mut store, "Buy milk");
        add_id(&mut store, "Walk dog");

        assert_eq!(texts(&store), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn test_add_rejects_whitespace() {
        let mut store = GoalStore::new();
        add_id(&mut store, "Buy milk");
        let before = store.clone();

        assert_eq!(store.add("   ").unwrap_err(), GoalError::EmptyGoal);
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_trimmed_mode_trims() {
        let mut store = GoalStore::new();
        add_id(&mut store, "  Buy milk  ");
        assert_eq!(texts(&store), vec!["Buy milk"]);
    }

    #[test]
    fn test_add_raw_mode_keeps_whitespace() {
        let mut store = GoalStore::with_text_mode(TextMode::Raw);
        add_id(&mut store, "  Buy milk  ");
        assert_eq!(texts(&store), vec!["  Buy milk  "]);
        assert_eq!(store.text_mode(), TextMode::Raw);
    }

    #[test]
    fn test_duplicate_text_gets_distinct_ids() {
        let mut store = GoalStore::new();
        let a = add_id(&mut store, "Same");
        let b = add_id(&mut store, "Same");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_middle_keeps_neighbours() {
        let mut store = GoalStore::new();
        let a = add_id(&mut store, "A");
        let b = add_id(&mut store, "B");
        let c = add_id(&mut store, "C");
        let goal_a = store.get(&a).cloned().unwrap();
        let goal_c = store.get(&c).cloned().unwrap();

        let removed = store.remove(&b).unwrap();
        assert_eq!(removed.text, "B");
        assert_eq!(store.as_slice(), &[goal_a, goal_c]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = GoalStore::new();
        add_id(&mut store, "A");
        let before = store.clone();

        assert!(store.remove(&GoalId::from("missing")).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_twice() {
        let mut store = GoalStore::new();
        let a = add_id(&mut store, "A");
        assert!(store.remove(&a).is_some());
        assert!(store.remove(&a).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_lookup_helpers() {
        let mut store = GoalStore::new();
        let a = add_id(&mut store, "A");
        let b = add_id(&mut store, "B");

        assert_eq!(store.position(&a), Some(0));
        assert_eq!(store.position(&b), Some(1));
        assert!(store.contains(&b));
        assert!(!store.contains(&GoalId::from("nope")));
        assert_eq!((&store).into_iter().count(), 2);
    }

    #[test]
    fn test_remove_absent_non_ascii_id_is_noop() {
        let mut store = GoalStore::new();
        add_id(&mut store, "A");
        let before = store.clone();

        assert!(store.remove(&GoalId::from("ééééa")).is_none());
        assert_eq!(store, before);
    }

    proptest! {
        #[test]
        fn prop_add_grows_by_one(
            prefix in "[ \t]{0,3}",
            body in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}",
            suffix in "[ \t]{0,3}",
            existing in 0usize..5,
        ) {
            let mut store = GoalStore::new();
            for i in 0..existing {
                store.add(&format!("goal {}", i)).unwrap();
            }
            let before = store.as_slice().to_vec();
            let submitted = format!("{}{}{}", prefix, body, suffix);

            store.add(&submitted).unwrap();

            prop_assert_eq!(store.len(), existing + 1);
            prop_assert_eq!(&store.as_slice()[..existing], &before[..]);
            prop_assert_eq!(store.as_slice()[existing].text.as_str(), submitted.trim());
        }

        #[test]
        fn prop_blank_is_rejected(blank in "[ \t\n\r]{0,10}", existing in 0usize..5) {
            let mut store = GoalStore::new();
            for i in 0..existing {
                store.add(&format!("goal {}", i)).unwrap();
            }
            let before = store.clone();

            prop_assert_eq!(store.add(&blank).unwrap_err(), GoalError::EmptyGoal);
            prop_assert_eq!(store, before);
        }

        #[test]
        fn prop_ids_unique(n in 1usize..200) {
            let mut store = GoalStore::new();
            for i in 0..n {
                store.add(&format!("goal {}", i)).unwrap();
            }
            let ids: HashSet<&GoalId> = store.iter().map(|g| &g.id).collect();
            prop_assert_eq!(ids.len(), n);
        }
    }
}
