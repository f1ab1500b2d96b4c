//! Task value carried through the scoring pipeline.

use super::{Labels, TaskId};
use serde::{Deserialize, Serialize};

/// One unit of work sourced from a tracker or a local goal.
///
/// Serializes as `{id, url, summary, labels: [{key, value}, ...], score}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(default)]
    url: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    labels: Labels,
    #[serde(default)]
    score: i64,
}

impl Task {
    /// Creates a task with a summary and no labels.
    #[must_use]
    pub fn new(id: TaskId, summary: impl Into<String>) -> Self {
        Self {
            id,
            url: String::new(),
            summary: summary.into(),
            labels: Labels::new(),
            score: 0,
        }
    }

    /// Sets the task URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Adds a label (add-if-absent).
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.add(key, value);
        self
    }

    /// Replaces all labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the score.
    #[must_use]
    pub const fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the tracker URL; empty for local tasks.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the summary text.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns the labels for mutation.
    pub const fn labels_mut(&mut self) -> &mut Labels {
        &mut self.labels
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Overwrites the score.
    pub const fn set_score(&mut self, score: i64) {
        self.score = score;
    }
}
