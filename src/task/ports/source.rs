//! Task source port consumed by the ranking pipeline.

use crate::config::Config;
use crate::task::domain::{Task, TaskDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Supplier of tasks, typically a tracker connector or a combinator over
/// other sources.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Loads the current tasks in source order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the backing tracker cannot be read or
    /// yields an invalid task.
    async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>>;
}

#[async_trait]
impl<S> TaskSource for Arc<S>
where
    S: TaskSource + ?Sized,
{
    async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>> {
        (**self).load_tasks(config).await
    }
}

#[async_trait]
impl<S> TaskSource for Box<S>
where
    S: TaskSource + ?Sized,
{
    async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>> {
        (**self).load_tasks(config).await
    }
}

/// Errors returned by task sources.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The backing tracker could not be read.
    #[error("task source '{source_name}' is unavailable: {cause}")]
    Unavailable {
        /// Name of the failing source.
        source_name: String,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The source produced a task that violates domain rules.
    #[error("task source produced an invalid task: {0}")]
    InvalidTask(#[from] TaskDomainError),
}

impl TaskSourceError {
    /// Wraps a tracker failure.
    pub fn unavailable(
        source_name: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            cause: Arc::new(err),
        }
    }

    /// Returns the failing source's name, when known.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::Unavailable { source_name, .. } => Some(source_name),
            Self::InvalidTask(_) => None,
        }
    }
}
