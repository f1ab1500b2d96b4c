//! Shared doubles for task module tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;

use crate::config::Config;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskSource, TaskSourceResult},
};

mock! {
    pub Source {}

    #[async_trait]
    impl TaskSource for Source {
        async fn load_tasks(&self, config: &Config) -> TaskSourceResult<Vec<Task>>;
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(
                Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
                    .single()
                    .expect("valid start instant"),
            ),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock lock");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

pub fn task(id: &str) -> Task {
    Task::new(task_id(id), format!("summary of {id}"))
}

pub fn scored(id: &str, score: i64) -> Task {
    task(id).with_score(score)
}

pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}
