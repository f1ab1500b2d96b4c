//! Applies locally-owned task state to freshly loaded tasks.

use chrono::{DateTime, Utc};

use crate::task::{
    domain::{Task, keys},
    ports::TaskStateReader,
};

/// Adds parent overrides and active markers from the state manager.
///
/// A parent recorded in state only applies when the tracker supplied none.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskAnnotator;

impl TaskAnnotator {
    /// Creates an annotator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Annotates `task` with the state recorded for it at instant `now`.
    #[must_use]
    pub fn annotate<R>(self, mut task: Task, state: &R, now: DateTime<Utc>) -> Task
    where
        R: TaskStateReader + ?Sized,
    {
        let Some(task_state) = state.task_state(task.id()) else {
            return task;
        };

        let labels = task.labels_mut();
        if !labels.contains_key(keys::PARENT) {
            if let Some(parent_id) = &task_state.parent_id {
                labels.add(keys::PARENT, parent_id.as_str());
            }
        }
        for marker in task_state.active_markers(now) {
            labels.add(keys::MARKER, marker.name.as_str());
        }
        task
    }
}
