//! Change magnitude check.
//!
//! Flags unusually large relative changes to an employee's base salary.

use rust_decimal::Decimal;

use super::CheckType;
use super::statistics::{percent_change, round_pct};
use super::thresholds::{grade, reported_threshold};
use crate::config::ChangeMagnitudeParams;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, Severity};

/// Checks the size of the change from the current to the proposed salary.
///
/// A zero current salary has no meaningful percentage change and passes, as
/// does a change too large to express as a percentage.
///
/// The result carries the current salary as `current_value`, the signed,
/// rounded change in percent as `projected_value` and the threshold it was
/// graded against.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::checks::check_change_magnitude;
/// use pay_policy_engine::config::ChangeMagnitudeParams;
/// use pay_policy_engine::evaluation::EvaluationContext;
/// use pay_policy_engine::models::{CheckStatus, Employee, Severity};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let context = EvaluationContext {
///     employee: Employee {
///         id: Uuid::nil(),
///         organization_id: Uuid::nil(),
///         base_salary: Decimal::ZERO,
///         gender: None,
///         country: "DE".to_string(),
///         job_family: None,
///         level: "L1".to_string(),
///         role_title: "Intern".to_string(),
///         currency: "EUR".to_string(),
///     },
///     peers: vec![],
///     salary_range: None,
///     recent_decisions: vec![],
/// };
///
/// let result = check_change_magnitude(
///     &context,
///     Decimal::from(45000),
///     &ChangeMagnitudeParams::default(),
///     Severity::Block,
/// );
/// assert_eq!(result.status, CheckStatus::Pass);
/// ```
pub fn check_change_magnitude(
    context: &EvaluationContext,
    proposed: Decimal,
    params: &ChangeMagnitudeParams,
    severity: Severity,
) -> CheckResult {
    let check_type = CheckType::ChangeMagnitude;
    let current = context.employee.base_salary;

    let Some(change_pct) = percent_change(proposed, current) else {
        if current.is_zero() {
            return CheckResult::pass(
                check_type,
                severity,
                "Current base salary is zero; change percentage undefined",
                "A relative change cannot be computed from a base salary of zero.",
            )
            .with_values(Some(current), None, None);
        }
        return CheckResult::pass(
            check_type,
            severity,
            "Change percentage is out of range; comparison skipped",
            format!(
                "The change from {} to {} {} is too large to express as a percentage.",
                current, proposed, context.employee.currency
            ),
        )
        .with_values(Some(current), None, None);
    };

    let magnitude = change_pct.abs();
    let status = grade(
        magnitude,
        params.warning_change_pct,
        params.block_change_pct,
        severity,
    );
    let threshold = reported_threshold(status, params.warning_change_pct, params.block_change_pct);
    let shown_pct = round_pct(change_pct);

    let headline = if change_pct.is_zero() {
        "No change to base salary".to_string()
    } else {
        let direction = if change_pct.is_sign_positive() {
            "increase"
        } else {
            "decrease"
        };
        format!("Proposed change is a {}% {}", shown_pct.abs(), direction)
    };

    CheckResult::new(
        check_type,
        status,
        severity,
        headline,
        format!(
            "Base salary moves from {} to {} {} (warning at {}%, block at {}%).",
            current,
            proposed,
            context.employee.currency,
            params.warning_change_pct,
            params.block_change_pct
        ),
    )
    .with_values(Some(current), Some(shown_pct), Some(threshold))
}
