//! Turns raw labels into derived flags and a base score.

use crate::config::{ScoreRule, TeamMember};
use crate::task::domain::{Labels, Task, keys, values};

use super::ScoreLabelPolicy;

/// Per-task rule engine.
///
/// Reconciliation never fails: unexpected label shapes, such as several
/// assignees, simply do not produce a flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreReconciler {
    score_label_policy: ScoreLabelPolicy,
}

impl ScoreReconciler {
    /// Creates a reconciler that appends `score` labels.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score_label_policy: ScoreLabelPolicy::Append,
        }
    }

    /// Sets how the base score is recorded as a label.
    #[must_use]
    pub const fn with_score_label_policy(mut self, policy: ScoreLabelPolicy) -> Self {
        self.score_label_policy = policy;
        self
    }

    /// Derives flags, computes the base score and sorts the labels.
    ///
    /// `team` is ordered; its first member is the primary identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskrank::config::{ScoreRule, TeamMember};
    /// use taskrank::task::domain::{Task, TaskId};
    /// use taskrank::task::services::ScoreReconciler;
    ///
    /// let task = Task::new(TaskId::new("jira:1").expect("valid id"), "Fix login")
    ///     .with_label("priority", "P1")
    ///     .with_label("assignee", "bob");
    /// let team = [TeamMember::new("alice")];
    /// let rules = [ScoreRule::new("priority", "P1", 100)];
    ///
    /// let reconciled = ScoreReconciler::new().reconcile(task, &team, &rules);
    ///
    /// assert_eq!(reconciled.score(), 100);
    /// assert!(reconciled.labels().has("flag", "delegated"));
    /// assert!(reconciled.labels().has("score", "100"));
    /// ```
    #[must_use]
    pub fn reconcile(self, mut task: Task, team: &[TeamMember], rules: &[ScoreRule]) -> Task {
        let labels = task.labels_mut();
        if is_delegated(labels, team.first()) {
            labels.add(keys::FLAG, values::FLAG_DELEGATED);
        }
        if is_blocked(labels) {
            labels.add(keys::FLAG, values::BLOCKED);
        }

        let score = base_score(labels, rules);
        self.score_label_policy.record(labels, score);
        labels.sort();
        task.set_score(score);
        task
    }
}

fn is_delegated(labels: &Labels, primary: Option<&TeamMember>) -> bool {
    match labels.values(keys::ASSIGNEE).as_slice() {
        [assignee] => {
            *assignee != values::ASSIGNEE_NONE
                && primary.is_none_or(|member| member.id != *assignee)
        }
        _ => false,
    }
}

fn is_blocked(labels: &Labels) -> bool {
    labels.contains_key(keys::BLOCKED_BY) || labels.has(keys::MARKER, values::BLOCKED)
}

fn base_score(labels: &Labels, rules: &[ScoreRule]) -> i64 {
    rules
        .iter()
        .filter(|rule| rule.matches(labels))
        .fold(0, |score, rule| score.saturating_add(rule.score))
}
