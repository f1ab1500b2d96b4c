//! Propagates scores up the parent/child hierarchy and ranks the batch.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::task::domain::{Task, keys};
use crate::value_graph::{NodeId, ValueGraph};

use super::ScoreLabelPolicy;

/// Builds one value graph per batch and ranks tasks by propagated score.
///
/// A task's propagated score is its base score plus the highest propagated
/// score among its children. Cycles in the parent links contribute nothing
/// and parents outside the batch are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScorePropagator {
    score_label_policy: ScoreLabelPolicy,
}

/// Graph nodes owned by one task.
#[derive(Debug, Clone, Copy)]
struct TaskNodes {
    /// Base score plus `children`.
    total: NodeId,
    /// Highest total among the task's children.
    children: NodeId,
}

impl ScorePropagator {
    /// Creates a propagator that appends `score` labels.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score_label_policy: ScoreLabelPolicy::Append,
        }
    }

    /// Sets how the propagated score is recorded as a label.
    #[must_use]
    pub const fn with_score_label_policy(mut self, policy: ScoreLabelPolicy) -> Self {
        self.score_label_policy = policy;
        self
    }

    /// Overwrites every task's score with its propagated score and returns
    /// the tasks ordered by descending score.
    ///
    /// The sort is stable: tasks with equal scores keep their input order.
    #[must_use]
    pub fn propagate(self, mut tasks: Vec<Task>) -> Vec<Task> {
        let (graph, nodes) = build_graph(&tasks);

        for (task, task_nodes) in tasks.iter_mut().zip(&nodes) {
            let score = graph.evaluate(task_nodes.total);
            task.set_score(score);
            self.score_label_policy.record(task.labels_mut(), score);
        }

        tasks.sort_by(|a, b| b.score().cmp(&a.score()));
        tasks
    }
}

fn build_graph(tasks: &[Task]) -> (ValueGraph, Vec<TaskNodes>) {
    let mut graph = ValueGraph::with_capacity(tasks.len().saturating_mul(3));
    let mut nodes = Vec::with_capacity(tasks.len());
    let mut by_id: HashMap<&str, TaskNodes> = HashMap::with_capacity(tasks.len());

    for task in tasks {
        let base = graph.constant(task.score());
        let children = graph.max([]);
        let total = graph.sum([base, children]);
        let task_nodes = TaskNodes { total, children };
        if by_id.insert(task.id().as_str(), task_nodes).is_some() {
            warn!(task_id = %task.id(), "duplicate task id in batch, later task receives children");
        }
        nodes.push(task_nodes);
    }

    for (task, task_nodes) in tasks.iter().zip(&nodes) {
        for parent_id in task.labels().values(keys::PARENT) {
            let Some(parent) = by_id.get(parent_id) else {
                debug!(task_id = %task.id(), parent_id, "ignoring unknown parent");
                continue;
            };
            if let Err(err) = graph.add_child(parent.children, task_nodes.total) {
                warn!(task_id = %task.id(), error = %err, "failed to link task to parent");
            }
        }
    }

    (graph, nodes)
}
