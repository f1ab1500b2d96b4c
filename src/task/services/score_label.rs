//! How recorded `score` labels are updated when a score is (re)computed.

use crate::task::domain::{Labels, keys};

/// Policy for recording a score as a `score=<value>` label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreLabelPolicy {
    /// Add the label if the exact pair is absent. A changed score leaves the
    /// earlier `score` labels in place, so base and propagated scores both
    /// appear.
    #[default]
    Append,
    /// Drop every existing `score` label before adding the new one.
    Replace,
}

impl ScoreLabelPolicy {
    /// Records `score` on `labels` according to the policy.
    pub fn record(self, labels: &mut Labels, score: i64) {
        if self == Self::Replace {
            labels.remove_key(keys::SCORE);
        }
        labels.add(keys::SCORE, score.to_string());
    }
}
