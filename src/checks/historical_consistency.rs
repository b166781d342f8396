//! Historical consistency check.
//!
//! Compares a proposed salary with the outcomes of recent finalized decisions
//! of the same type at the same level.

use rust_decimal::Decimal;

use super::CheckType;
use super::statistics::{mean, percent_change, round_pct};
use crate::config::HistoricalConsistencyParams;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, CheckStatus, Severity};

/// Checks a proposed salary against the average outcome of similar decisions.
///
/// With no recent decisions, a zero average or a deviation too large to
/// express as a percentage, the check passes. A deviation at or beyond the
/// warning threshold is a violation at the rule's severity.
///
/// The result carries the historical average as `current_value`, the rounded
/// deviation as `projected_value` and the warning threshold.
pub fn check_historical_consistency(
    context: &EvaluationContext,
    proposed: Decimal,
    params: &HistoricalConsistencyParams,
    severity: Severity,
) -> CheckResult {
    let check_type = CheckType::HistoricalConsistency;

    let outcomes: Vec<Decimal> = context
        .recent_decisions
        .iter()
        .map(|d| d.pay_after_base)
        .collect();

    if outcomes.is_empty() {
        return CheckResult::pass(
            check_type,
            severity,
            "No recent similar decisions to compare against",
            "No finalized decisions of this type at this level took effect in the last 12 months.",
        );
    }

    let historical_mean = mean(&outcomes);
    let Some((average, signed_pct)) =
        historical_mean.and_then(|average| Some((average, percent_change(proposed, average)?)))
    else {
        if historical_mean.is_some_and(|average| average.is_zero()) {
            return CheckResult::pass(
                check_type,
                severity,
                "Historical average is zero; comparison skipped",
                format!(
                    "The {} recent similar decisions average a base salary of zero, so a relative deviation cannot be computed.",
                    outcomes.len()
                ),
            );
        }
        return CheckResult::pass(
            check_type,
            severity,
            "Deviation from the historical average is out of range; comparison skipped",
            format!(
                "The proposal of {} cannot be compared with the {} recent similar decisions as a percentage.",
                proposed,
                outcomes.len()
            ),
        );
    };

    let deviation_pct = signed_pct.abs();
    let status = if deviation_pct >= params.warning_deviation_pct {
        severity.violation_status()
    } else {
        CheckStatus::Pass
    };
    let shown_pct = round_pct(deviation_pct);
    let direction = if signed_pct.is_sign_negative() {
        "below"
    } else {
        "above"
    };

    CheckResult::new(
        check_type,
        status,
        severity,
        format!(
            "Proposed salary is {}% {} the average of {} similar recent decisions",
            shown_pct,
            direction,
            outcomes.len()
        ),
        format!(
            "Recent decisions of this type at level {} averaged {} {}; the proposal of {} is {}% {} that (limit {}%).",
            context.employee.level,
            round_money(average),
            context.employee.currency,
            proposed,
            shown_pct,
            direction,
            params.warning_deviation_pct
        ),
    )
    .with_values(
        Some(average),
        Some(shown_pct),
        Some(params.warning_deviation_pct),
    )
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}
