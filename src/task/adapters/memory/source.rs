//! In-memory task source for wiring and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::config::Config;
use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Task source serving a replaceable in-memory task list.
///
/// The source can be switched into a failing mode to exercise error paths.
#[derive(Debug)]
pub struct StaticTaskSource {
    name: String,
    state: RwLock<StaticSourceState>,
    calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct StaticSourceState {
    tasks: Vec<Task>,
    failure: Option<String>,
}

impl StaticTaskSource {
    /// Creates a source serving `tasks`.
    #[must_use]
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(StaticSourceState {
                tasks,
                failure: None,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a source that fails every load with `message`.
    #[must_use]
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        let source = Self::new(name, Vec::new());
        source.fail_with(message);
        source
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the served tasks.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks = tasks;
    }

    /// Makes subsequent loads fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failure = Some(message.into());
    }

    /// Makes subsequent loads succeed again.
    pub fn recover(&self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failure = None;
    }

    /// Returns how many loads have been attempted.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    async fn load_tasks(&self, _config: &Config) -> TaskSourceResult<Vec<Task>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().map_err(|err| {
            TaskSourceError::unavailable(&self.name, std::io::Error::other(err.to_string()))
        })?;
        if let Some(message) = &state.failure {
            return Err(TaskSourceError::unavailable(
                &self.name,
                std::io::Error::other(message.clone()),
            ));
        }
        Ok(state.tasks.clone())
    }
}
