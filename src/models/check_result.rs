//! Check and evaluation result models.
//!
//! These types capture the verdict of each individual policy check and the
//! aggregated verdict for a whole evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Severity;
use crate::checks::CheckType;

/// The verdict of a single check or of a whole evaluation.
///
/// Variants are ordered by precedence, so the worst verdict is the maximum.
///
/// # Example
///
/// ```
/// use pay_policy_engine::models::CheckStatus;
///
/// assert!(CheckStatus::Block > CheckStatus::Warning);
/// assert!(CheckStatus::Warning > CheckStatus::Pass);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// The decision is consistent with the policy.
    Pass,
    /// The decision should be reviewed but may proceed.
    Warning,
    /// The decision must not proceed without review.
    Block,
}

/// The outcome of running one policy check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The check that produced this result.
    pub check_type: CheckType,
    /// The verdict of the check.
    pub status: CheckStatus,
    /// The severity configured on the rule (the verdict ceiling).
    pub severity: Severity,
    /// A one-line summary.
    pub headline: String,
    /// A longer human-readable explanation.
    pub detail: String,
    /// The baseline the proposal was compared against, where meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
    /// The measured or simulated value for the proposal, where meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_value: Option<Decimal>,
    /// The threshold the measurement was compared against, where meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Decimal>,
}

impl CheckResult {
    /// Creates a result with no numeric fields.
    pub fn new(
        check_type: CheckType,
        status: CheckStatus,
        severity: Severity,
        headline: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            check_type,
            status,
            severity,
            headline: headline.into(),
            detail: detail.into(),
            current_value: None,
            projected_value: None,
            threshold: None,
        }
    }

    /// Creates a passing result, used when the check has nothing to object to
    /// or lacks the data to judge.
    pub fn pass(
        check_type: CheckType,
        severity: Severity,
        headline: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(check_type, CheckStatus::Pass, severity, headline, detail)
    }

    /// Sets the numeric fields of the result.
    pub fn with_values(
        mut self,
        current_value: Option<Decimal>,
        projected_value: Option<Decimal>,
        threshold: Option<Decimal>,
    ) -> Self {
        self.current_value = current_value;
        self.projected_value = projected_value;
        self.threshold = threshold;
        self
    }
}

/// The aggregated verdict of evaluating a proposed pay change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The worst verdict across all checks.
    pub overall_status: CheckStatus,
    /// Every check that ran, in rule order, including passing ones.
    pub checks: Vec<CheckResult>,
}

impl EvaluationResult {
    /// Aggregates check results into an overall verdict.
    ///
    /// Any `Block` makes the evaluation `Block`; otherwise any `Warning` makes it
    /// `Warning`; otherwise it passes. All results are retained.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_policy_engine::models::{CheckStatus, EvaluationResult};
    ///
    /// let result = EvaluationResult::from_checks(vec![]);
    /// assert_eq!(result.overall_status, CheckStatus::Pass);
    /// assert!(result.checks.is_empty());
    /// ```
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let overall_status = if checks.iter().any(|c| c.status == CheckStatus::Block) {
            CheckStatus::Block
        } else if checks.iter().any(|c| c.status == CheckStatus::Warning) {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };

        Self {
            overall_status,
            checks,
        }
    }

    /// Returns true if the decision must not proceed.
    pub fn is_blocked(&self) -> bool {
        self.overall_status == CheckStatus::Block
    }
}
