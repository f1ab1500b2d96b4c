//! Time-to-live memoization over a task source.

use crate::config::Config;
use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceResult},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::any::type_name;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Decorator that serves the last successful load until its TTL expires.
///
/// Every caller receives its own copy of the cached tasks. Failures are never
/// cached and never replaced by stale data: the error is returned, the stored
/// entry is left as it was and the next call retries the wrapped source.
pub struct CachedSource<S, C>
where
    S: TaskSource,
    C: Clock + Send + Sync,
{
    source: S,
    ttl: TimeDelta,
    clock: Arc<C>,
    entry: Mutex<CacheEntry>,
}

#[derive(Debug, Default)]
struct CacheEntry {
    tasks: Vec<Task>,
    valid_until: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|valid_until| now < valid_until)
    }
}

impl<S, C> CachedSource<S, C>
where
    S: TaskSource,
    C: Clock + Send + Sync,
{
    /// Wraps `source`, keeping each successful load for `ttl`.
    #[must_use]
    pub fn new(source: S, ttl: TimeDelta, clock: Arc<C>) -> Self {
        Self {
            source,
            ttl,
            clock,
            entry: Mutex::new(CacheEntry::default()),
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the wrapped source.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<S, C> TaskSource for CachedSource<S, C>
where
    S: TaskSource,
    C: Clock + Send + Sync,
{
    async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>> {
        // Held across the wrapped call so concurrent misses populate once.
        let mut entry = self.entry.lock().await;
        if entry.is_fresh_at(self.clock.utc()) {
            debug!(
                source = type_name::<S>(),
                tasks = entry.tasks.len(),
                "task cache hit"
            );
            return Ok(entry.tasks.clone());
        }

        debug!(source = type_name::<S>(), "task cache miss");
        let tasks = self.source.load_tasks(config).await.inspect_err(|err| {
            warn!(source = type_name::<S>(), error = %err, "task source failed, cache left unchanged");
        })?;

        entry.valid_until = Some(
            self.clock
                .utc()
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
        entry.tasks = tasks;
        Ok(entry.tasks.clone())
    }
}
