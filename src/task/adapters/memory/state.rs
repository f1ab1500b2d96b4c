//! Thread-safe in-memory task state store.

use std::sync::{PoisonError, RwLock};

use crate::task::{
    domain::{Goal, Marker, TaskId, TaskState},
    ports::TaskStateReader,
};

/// In-memory state manager.
///
/// Request handlers mutate the store; the scoring engine reads it through
/// [`TaskStateReader`] only.
#[derive(Debug, Default)]
pub struct InMemoryTaskStateStore {
    state: RwLock<StoredState>,
}

#[derive(Debug, Default)]
struct StoredState {
    goals: Vec<Goal>,
    tasks: Vec<TaskState>,
}

impl StoredState {
    fn update_task_state(&mut self, id: &TaskId, update: impl FnOnce(&mut TaskState)) {
        if let Some(existing) = self.tasks.iter_mut().find(|state| &state.id == id) {
            update(existing);
            return;
        }
        let mut created = TaskState::new(id.clone());
        update(&mut created);
        self.tasks.push(created);
    }
}

impl InMemoryTaskStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from previously recorded goals and task states.
    #[must_use]
    pub fn from_parts(goals: Vec<Goal>, tasks: Vec<TaskState>) -> Self {
        Self {
            state: RwLock::new(StoredState { goals, tasks }),
        }
    }

    /// Adds a goal unless one with the same id exists.
    ///
    /// Returns `true` when the goal was added.
    pub fn add_goal(&self, goal: Goal) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.goals.iter().any(|existing| existing.id == goal.id) {
            return false;
        }
        state.goals.push(goal);
        true
    }

    /// Attaches a marker to a task, replacing the expiry of a marker with the
    /// same name.
    pub fn add_task_marker(&self, id: &TaskId, marker: Marker) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.update_task_state(id, |task_state| {
            match task_state
                .markers
                .iter_mut()
                .find(|existing| existing.name == marker.name)
            {
                Some(existing) => existing.until = marker.until,
                None => task_state.markers.push(marker),
            }
        });
    }

    /// Records a parent override for a task.
    pub fn set_task_parent(&self, id: &TaskId, parent_id: TaskId) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.update_task_state(id, |task_state| task_state.parent_id = Some(parent_id));
    }
}

impl TaskStateReader for InMemoryTaskStateStore {
    fn goals(&self) -> Vec<Goal> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .goals
            .clone()
    }

    fn task_state(&self, id: &TaskId) -> Option<TaskState> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .iter()
            .find(|state| &state.id == id)
            .cloned()
    }
}
