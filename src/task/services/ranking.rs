//! Per-request ranking pipeline.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceError, TaskStateReader},
};

use super::{ScoreLabelPolicy, ScorePropagator, ScoreReconciler, TaskAnnotator};

/// Service-level errors for ranking requests.
#[derive(Debug, Error)]
pub enum TaskRankingError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A task source failed; no partial result is produced.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
}

/// Result type for ranking operations.
pub type TaskRankingResult<T> = Result<T, TaskRankingError>;

/// Loads, annotates, scores and ranks tasks.
#[derive(Clone)]
pub struct TaskRankingService<S, R, C>
where
    S: TaskSource,
    R: TaskStateReader,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    state: Arc<R>,
    clock: Arc<C>,
    annotator: TaskAnnotator,
    reconciler: ScoreReconciler,
    propagator: ScorePropagator,
}

impl<S, R, C> TaskRankingService<S, R, C>
where
    S: TaskSource,
    R: TaskStateReader,
    C: Clock + Send + Sync,
{
    /// Creates a ranking service.
    #[must_use]
    pub const fn new(source: Arc<S>, state: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            source,
            state,
            clock,
            annotator: TaskAnnotator::new(),
            reconciler: ScoreReconciler::new(),
            propagator: ScorePropagator::new(),
        }
    }

    /// Sets how base and propagated scores are recorded as labels.
    #[must_use]
    pub const fn with_score_label_policy(mut self, policy: ScoreLabelPolicy) -> Self {
        self.reconciler = self.reconciler.with_score_label_policy(policy);
        self.propagator = self.propagator.with_score_label_policy(policy);
        self
    }

    /// Produces the ranked task list for one request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRankingError::Config`] when the configuration is invalid
    /// and [`TaskRankingError::Source`] when any source fails.
    pub async fn rank(&self, config: &Config) -> TaskRankingResult<Vec<Task>> {
        config.validate().inspect_err(|err| {
            warn!(error = %err, "rejecting ranking request");
        })?;

        let loaded = self.source.load_tasks(config).await?;
        let now = self.clock.utc();
        let reconciled = loaded
            .into_iter()
            .map(|task| self.annotator.annotate(task, &*self.state, now))
            .map(|task| {
                self.reconciler
                    .reconcile(task, config.team(), config.score_rules())
            })
            .collect();

        let ranked = self.propagator.propagate(reconciled);
        info!(tasks = ranked.len(), "ranked tasks");
        Ok(ranked)
    }
}
