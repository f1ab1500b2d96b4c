//! Fan-in over several task sources.

use crate::config::Config;
use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceResult},
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Concatenates the tasks of several sources in configured order.
///
/// Sources are queried one after another. The first failure aborts the whole
/// load: tasks already fetched are discarded and later sources are not
/// queried.
#[derive(Default)]
pub struct AggregatedSource {
    sources: Vec<Box<dyn TaskSource>>,
}

impl AggregatedSource {
    /// Creates an aggregate with no sources.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates an aggregate over boxed sources, queried in vector order.
    #[must_use]
    pub fn from_sources(sources: Vec<Box<dyn TaskSource>>) -> Self {
        Self { sources }
    }

    /// Appends a source after the existing ones.
    #[must_use]
    pub fn with_source(mut self, source: impl TaskSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when there are no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[async_trait]
impl TaskSource for AggregatedSource {
    async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>> {
        let mut tasks = Vec::new();
        for (index, source) in self.sources.iter().enumerate() {
            let loaded = source.load_tasks(config).await.inspect_err(|err| {
                warn!(source_index = index, error = %err, "aborting aggregated load");
            })?;
            debug!(source_index = index, tasks = loaded.len(), "loaded tasks");
            tasks.extend(loaded);
        }
        Ok(tasks)
    }
}
