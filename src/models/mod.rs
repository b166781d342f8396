//! Core data models for the pay policy engine.
//!
//! This module contains the read-only projections the engine consumes from the
//! data-access collaborator and the result types it produces.

mod check_result;
mod decision;
mod employee;
mod peer;
mod policy_rule;
mod salary_range;

pub use check_result::{CheckResult, CheckStatus, EvaluationResult};
pub use decision::RecentSimilarDecision;
pub use employee::Employee;
pub use peer::{ComparatorGroup, ComparatorPeer};
pub use policy_rule::{PolicyRule, Severity};
pub use salary_range::SalaryRange;
