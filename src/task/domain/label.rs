//! Label pairs and the ordered label multimap carried by every task.

use serde::{Deserialize, Serialize};

/// Well-known label keys understood by the scoring engine.
pub mod keys {
    /// Tracker assignee; exactly one value is expected.
    pub const ASSIGNEE: &str = "assignee";
    /// Identifier of a task blocking this one. May repeat.
    pub const BLOCKED_BY: &str = "blocked-by";
    /// Active manual marker attached through task state.
    pub const MARKER: &str = "marker";
    /// Flag derived during reconciliation.
    pub const FLAG: &str = "flag";
    /// Identifier of the parent task. May repeat.
    pub const PARENT: &str = "parent";
    /// Recorded score.
    pub const SCORE: &str = "score";
    /// Name of the source that produced the task.
    pub const SOURCE: &str = "_source";
}

/// Well-known label values understood by the scoring engine.
pub mod values {
    /// Assignee sentinel for unassigned tasks.
    pub const ASSIGNEE_NONE: &str = "NONE";
    /// Flag for tasks assigned to someone other than the primary team member.
    pub const FLAG_DELEGATED: &str = "delegated";
    /// Flag and marker name for blocked tasks.
    pub const BLOCKED: &str = "blocked";
    /// Source value for goal tasks.
    pub const SOURCE_GOAL: &str = "goal";
}

/// A single `(key, value)` metadata pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    /// Label key.
    pub key: String,
    /// Label value.
    pub value: String,
}

impl Label {
    /// Creates a label pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn is(&self, key: &str, value: &str) -> bool {
        self.key == key && self.value == value
    }
}

/// Ordered multimap of labels.
///
/// A key may repeat with different values. Insertion order is kept until
/// [`Labels::sort`] canonicalizes it. Adding a pair that is already present
/// is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<Label>);

impl Labels {
    /// Creates an empty label set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` when the exact `(key, value)` pair is present.
    #[must_use]
    pub fn has(&self, key: &str, value: &str) -> bool {
        self.0.iter().any(|label| label.is(key, value))
    }

    /// Returns `true` when at least one label uses `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|label| label.key == key)
    }

    /// Adds the pair unless it is already present.
    ///
    /// Returns `true` when the pair was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskrank::task::domain::Labels;
    ///
    /// let mut labels = Labels::new();
    /// assert!(labels.add("blocked-by", "a"));
    /// assert!(!labels.add("blocked-by", "a"));
    /// assert!(labels.add("blocked-by", "b"));
    /// assert_eq!(labels.values("blocked-by"), vec!["a", "b"]);
    /// ```
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let label = Label::new(key, value);
        if self.has(&label.key, &label.value) {
            return false;
        }
        self.0.push(label);
        true
    }

    /// Returns every value stored under `key`, in label order.
    #[must_use]
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|label| label.key == key)
            .map(|label| label.value.as_str())
            .collect()
    }

    /// Removes every label stored under `key`, returning how many were removed.
    pub fn remove_key(&mut self, key: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|label| label.key != key);
        before.saturating_sub(self.0.len())
    }

    /// Sorts labels by key, then value, ascending.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Iterates over labels in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the labels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Label] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut labels = Self::new();
        for (key, value) in iter {
            labels.add(key, value);
        }
        labels
    }
}
