//! Task source exposing locally-owned goals as tasks.

use crate::config::Config;
use crate::task::{
    domain::{Task, TaskId, keys, values},
    ports::{TaskSource, TaskSourceResult, TaskStateReader},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Namespace prefix of goal task identifiers.
pub const GOAL_NAMESPACE: &str = "goal";

/// Surfaces each goal as a task with id `goal:<goal id>`.
pub struct GoalTaskSource<R>
where
    R: TaskStateReader,
{
    state: Arc<R>,
}

impl<R> GoalTaskSource<R>
where
    R: TaskStateReader,
{
    /// Creates a goal source over the state reader.
    #[must_use]
    pub const fn new(state: Arc<R>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl<R> TaskSource for GoalTaskSource<R>
where
    R: TaskStateReader,
{
    async fn load_tasks(&self, _config: &Config) -> TaskSourceResult<Vec<Task>> {
        let tasks = self
            .state
            .goals()
            .into_iter()
            .filter_map(|goal| match TaskId::namespaced(GOAL_NAMESPACE, &goal.id) {
                Ok(id) => Some(
                    Task::new(id, goal.id).with_label(keys::SOURCE, values::SOURCE_GOAL),
                ),
                Err(err) => {
                    warn!(error = %err, "skipping goal without an id");
                    None
                }
            })
            .collect();
        Ok(tasks)
    }
}
