//! The scoring engine.
//!
//! [`TaskAnnotator`], [`ScoreReconciler`] and [`ScorePropagator`] are pure
//! transforms; [`TaskRankingService`] chains them behind the task and state
//! ports for one request.

mod annotate;
mod propagate;
mod ranking;
mod reconcile;
mod score_label;

pub use annotate::TaskAnnotator;
pub use propagate::ScorePropagator;
pub use ranking::{TaskRankingError, TaskRankingResult, TaskRankingService};
pub use reconcile::ScoreReconciler;
pub use score_label::ScoreLabelPolicy;
