//! Read-only access to locally-owned task state.

use crate::task::domain::{Goal, TaskId, TaskState};

/// Read accessors over the state manager.
///
/// The scoring engine only reads through this port; mutation belongs to the
/// request handlers that own the state store.
pub trait TaskStateReader: Send + Sync {
    /// Returns every goal in stored order.
    fn goals(&self) -> Vec<Goal>;

    /// Returns the state recorded for a task, if any.
    fn task_state(&self, id: &TaskId) -> Option<TaskState>;
}

impl<R> TaskStateReader for std::sync::Arc<R>
where
    R: TaskStateReader + ?Sized,
{
    fn goals(&self) -> Vec<Goal> {
        (**self).goals()
    }

    fn task_state(&self, id: &TaskId) -> Option<TaskState> {
        (**self).task_state(id)
    }
}
