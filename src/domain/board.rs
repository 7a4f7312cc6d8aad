//! Kanban board domain model
//!
//! A board has a name and an ordered, duplicate-free set of status labels.
//! New boards start with a single `Backlog` status. No status is protected:
//! every label, including the seeded one, can be removed.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Label seeded into every new board
pub const DEFAULT_STATUS: &str = "Backlog";

/// Ordered set of status labels
///
/// Insertion order is preserved; inserting a label that is already present
/// is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSet(Vec<String>);

impl StatusSet {
    /// Creates an empty status set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a label if not already present
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            false
        } else {
            self.0.push(label);
            true
        }
    }

    /// Removes a label, returning true if it was present
    pub fn remove(&mut self, label: &str) -> bool {
        match self.position(label) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|s| s == label)
    }

    /// Returns the index of a label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|s| s == label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for StatusSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StatusSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl<'a> IntoIterator for &'a StatusSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for StatusSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Duplicates in the input collapse to their first occurrence
        let labels = Vec::<String>::deserialize(deserializer)?;
        Ok(labels.into_iter().collect())
    }
}

/// A named board with its status labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    name: String,
    statuses: StatusSet,
}

impl KanbanBoard {
    /// Creates a board seeded with [`DEFAULT_STATUS`]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_statuses(name, [DEFAULT_STATUS])
    }

    /// Creates a board seeded with the given labels
    pub fn with_statuses<S: Into<String>>(
        name: impl Into<String>,
        statuses: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            statuses: statuses.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statuses(&self) -> &StatusSet {
        &self.statuses
    }

    pub fn has_status(&self, label: &str) -> bool {
        self.statuses.contains(label)
    }

    /// Appends a status; returns false if it was already on the board
    pub fn add_status(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        let added = self.statuses.insert(label.as_str());
        if added {
            debug!(board = %self.name, status = %label, "added status");
        }
        added
    }

    /// Removes a status; returns false if it was not on the board
    pub fn remove_status(&mut self, label: &str) -> bool {
        let removed = self.statuses.remove(label);
        if removed {
            debug!(board = %self.name, status = %label, "removed status");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_board_has_backlog() {
        let board = KanbanBoard::new("Things to Do");
        assert_eq!(board.name(), "Things to Do");
        assert!(board.has_status("Backlog"));
        assert_eq!(board.statuses().as_slice(), ["Backlog"]);
    }

    #[test]
    fn new_board_does_not_have_bogus() {
        let board = KanbanBoard::new("Things to Do");
        assert!(!board.has_status("Bogus"));
    }

    #[test]
    fn add_status() {
        let mut board = KanbanBoard::new("Things to Do");

        assert!(board.add_status("my-status"));

        assert!(board.has_status("my-status"));
        assert_eq!(board.statuses().position("my-status"), Some(1));
    }

    #[test]
    fn add_status_is_idempotent() {
        let mut board = KanbanBoard::new("Things to Do");

        assert!(board.add_status("Doing"));
        assert!(!board.add_status("Doing"));
        assert!(!board.add_status("Backlog"));

        assert_eq!(board.statuses().as_slice(), ["Backlog", "Doing"]);
    }

    #[test]
    fn add_empty_status_is_accepted() {
        let mut board = KanbanBoard::new("Things to Do");
        assert!(board.add_status(""));
        assert!(board.has_status(""));
    }

    #[test]
    fn remove_status() {
        let mut board = KanbanBoard::new("Things to Do");

        board.add_status("my-status");
        assert!(board.has_status("my-status"));

        assert!(board.remove_status("my-status"));
        assert!(!board.has_status("my-status"));
    }

    #[test]
    fn backlog_can_be_removed() {
        let mut board = KanbanBoard::new("Things to Do");

        assert!(board.remove_status("Backlog"));

        assert!(!board.has_status("Backlog"));
        assert!(board.statuses().is_empty());
    }

    #[test]
    fn remove_missing_status_is_noop() {
        let mut board = KanbanBoard::new("Things to Do");
        assert!(!board.remove_status("Bogus"));
        assert_eq!(board.statuses().len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut board = KanbanBoard::new("Release");
        board.add_status("Doing");
        board.add_status("Review");
        board.add_status("Done");
        board.remove_status("Review");
        board.add_status("Review");

        let labels: Vec<_> = board.statuses().iter().collect();
        assert_eq!(labels, vec!["Backlog", "Doing", "Done", "Review"]);
    }

    #[test]
    fn with_statuses_deduplicates() {
        let board = KanbanBoard::with_statuses("Ops", ["Todo", "Doing", "Todo", "Done"]);
        assert_eq!(board.statuses().as_slice(), ["Todo", "Doing", "Done"]);
        assert!(!board.has_status("Backlog"));
    }

    #[test]
    fn serialization() {
        let mut board = KanbanBoard::new("Things to Do");
        board.add_status("Done");

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Things to Do", "statuses": ["Backlog", "Done"] })
        );
    }

    #[test]
    fn deserialization_collapses_duplicates() {
        let board: KanbanBoard =
            serde_json::from_str(r#"{"name": "x", "statuses": ["A", "B", "A"]}"#).unwrap();
        assert_eq!(board.statuses().as_slice(), ["A", "B"]);
    }

    proptest! {
        #[test]
        fn statuses_stay_unique(ops in prop::collection::vec((any::<bool>(), "[a-d]"), 0..50)) {
            let mut board = KanbanBoard::new("prop");
            let mut model: Vec<String> = vec![DEFAULT_STATUS.to_string()];

            for (add, label) in ops {
                if add {
                    board.add_status(label.as_str());
                    if !model.contains(&label) {
                        model.push(label);
                    }
                } else {
                    board.remove_status(&label);
                    model.retain(|s| s != &label);
                }
            }

            prop_assert_eq!(board.statuses().as_slice(), model.as_slice());
        }
    }
}
