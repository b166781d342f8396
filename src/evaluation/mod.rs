//! Evaluation of proposed pay changes.
//!
//! The [`PolicyEvaluator`] selects the rules that apply to a decision, builds
//! one [`EvaluationContext`] for them and aggregates their verdicts.

mod context;
mod orchestrator;

pub use context::{
    EvaluationContext, RECENT_DECISION_LIMIT, RECENT_DECISION_WINDOW_DAYS, build_context,
    recent_decision_window_start,
};
pub use orchestrator::PolicyEvaluator;
