//! Locally-owned task state: goals, markers and parent overrides.

use super::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locally-owned objective surfaced as a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier, unique among goals.
    pub id: String,
    /// Importance recorded with the goal.
    #[serde(default)]
    pub score: i64,
}

impl Goal {
    /// Creates a goal.
    #[must_use]
    pub fn new(id: impl Into<String>, score: i64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// A manual, optionally time-bounded annotation on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker name, surfaced as a `marker=<name>` label.
    pub name: String,
    /// Instant after which the marker no longer applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

impl Marker {
    /// Creates a marker without expiry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            until: None,
        }
    }

    /// Sets the expiry instant.
    #[must_use]
    pub const fn until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Returns `true` when the marker applies at `now`.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.until.is_none_or(|until| until > now)
    }
}

/// State recorded locally for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// Task the state belongs to.
    pub id: TaskId,
    /// Parent override used when the tracker provides none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
    /// Markers in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
}

impl TaskState {
    /// Creates empty state for a task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            parent_id: None,
            markers: Vec::new(),
        }
    }

    /// Returns markers active at `now`.
    pub fn active_markers(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Marker> {
        self.markers
            .iter()
            .filter(move |marker| marker.is_active_at(now))
    }
}
