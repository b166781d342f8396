//! Threshold grading under the severity ceiling.

use rust_decimal::Decimal;

use crate::models::{CheckStatus, Severity};

/// Grades a measurement against warning and block thresholds.
///
/// Crossing the block threshold produces `Block` only when the rule's severity
/// is `Block`; a `Warning` rule reports `Warning` instead. Between the warning
/// and block thresholds the result is `Warning` regardless of severity.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::checks::grade;
/// use pay_policy_engine::models::{CheckStatus, Severity};
/// use rust_decimal::Decimal;
///
/// let (warn, block) = (Decimal::from(10), Decimal::from(20));
/// assert_eq!(grade(Decimal::from(25), warn, block, Severity::Block), CheckStatus::Block);
/// assert_eq!(grade(Decimal::from(25), warn, block, Severity::Warning), CheckStatus::Warning);
/// assert_eq!(grade(Decimal::from(15), warn, block, Severity::Block), CheckStatus::Warning);
/// assert_eq!(grade(Decimal::from(5), warn, block, Severity::Block), CheckStatus::Pass);
/// ```
pub fn grade(value: Decimal, warning: Decimal, block: Decimal, severity: Severity) -> CheckStatus {
    if value >= block {
        severity.violation_status()
    } else if value >= warning {
        CheckStatus::Warning
    } else {
        CheckStatus::Pass
    }
}

/// Returns the threshold to report alongside `status`.
pub(crate) fn reported_threshold(status: CheckStatus, warning: Decimal, block: Decimal) -> Decimal {
    if status == CheckStatus::Block {
        block
    } else {
        warning
    }
}
