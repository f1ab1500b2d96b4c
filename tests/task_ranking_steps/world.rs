//! Shared world state for task ranking BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskrank::{
    config::Config,
    task::{
        adapters::memory::InMemoryTaskStateStore, domain::Task, services::TaskRankingError,
    },
};

/// Tasks served by one named source.
pub struct SourceFixture {
    pub name: String,
    pub tasks: Vec<Task>,
    pub unavailable: bool,
}

/// Scenario world for task ranking behaviour tests.
pub struct RankingWorld {
    pub config: Config,
    pub sources: Vec<SourceFixture>,
    pub state: Arc<InMemoryTaskStateStore>,
    pub last_result: Option<Result<Vec<Task>, TaskRankingError>>,
}

impl RankingWorld {
    /// Creates a world with no sources, state or configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            sources: Vec::new(),
            state: Arc::new(InMemoryTaskStateStore::new()),
            last_result: None,
        }
    }

    /// Applies `update` to the source named `name`, creating it after the
    /// existing ones.
    pub fn update_source(&mut self, name: &str, update: impl FnOnce(&mut SourceFixture)) {
        if let Some(source) = self.sources.iter_mut().find(|source| source.name == name) {
            update(source);
            return;
        }
        let mut source = SourceFixture {
            name: name.to_owned(),
            tasks: Vec::new(),
            unavailable: false,
        };
        update(&mut source);
        self.sources.push(source);
    }

    /// Returns the pending task with the given id.
    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.sources
            .iter_mut()
            .flat_map(|source| source.tasks.iter_mut())
            .find(|task| task.id().as_str() == id)
    }

    /// Returns the successful ranking of the last `when` step.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing was ranked or ranking failed.
    pub fn ranked(&self) -> Result<&[Task], eyre::Report> {
        let result = self
            .last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing ranking result in scenario world"))?;
        result
            .as_deref()
            .map_err(|err| eyre::eyre!("unexpected ranking failure: {err}"))
    }
}

impl Default for RankingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RankingWorld {
    RankingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
