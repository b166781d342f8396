//! Salary range compliance check.
//!
//! Verifies that a proposed base salary falls inside the configured salary band
//! for the employee's role.

use rust_decimal::{Decimal, RoundingStrategy};

use super::CheckType;
use super::statistics::round_pct;
use crate::config::SalaryRangeParams;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, CheckStatus, Severity};

/// Checks a proposed salary against the role's salary range.
///
/// A missing range is reported as a pass: it is missing data, not a
/// violation. Outside the band the result is the rule's severity unless the
/// rule explicitly allows that side. Inside the band the result passes and
/// reports the position within the band.
///
/// The result carries the current salary as `current_value`, the proposal as
/// `projected_value` and, on a violation, the breached bound as `threshold`.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::checks::check_salary_range;
/// use pay_policy_engine::config::SalaryRangeParams;
/// use pay_policy_engine::evaluation::EvaluationContext;
/// use pay_policy_engine::models::{CheckStatus, Employee, SalaryRange, Severity};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let context = EvaluationContext {
///     employee: Employee {
///         id: Uuid::nil(),
///         organization_id: Uuid::nil(),
///         base_salary: Decimal::from(110000),
///         gender: None,
///         country: "DE".to_string(),
///         job_family: Some("engineering".to_string()),
///         level: "L4".to_string(),
///         role_title: "Staff Engineer".to_string(),
///         currency: "EUR".to_string(),
///     },
///     peers: vec![],
///     salary_range: Some(SalaryRange {
///         min: Decimal::from(80000),
///         mid: Decimal::from(100000),
///         max: Decimal::from(120000),
///         currency: "EUR".to_string(),
///     }),
///     recent_decisions: vec![],
/// };
///
/// let result = check_salary_range(
///     &context,
///     Decimal::from(130000),
///     &SalaryRangeParams::default(),
///     Severity::Block,
/// );
/// assert_eq!(result.status, CheckStatus::Block);
/// assert!(result.headline.contains("~8.3%"));
/// ```
pub fn check_salary_range(
    context: &EvaluationContext,
    proposed: Decimal,
    params: &SalaryRangeParams,
    severity: Severity,
) -> CheckResult {
    let check_type = CheckType::SalaryRangeCompliance;
    let employee = &context.employee;

    let Some(range) = &context.salary_range else {
        return CheckResult::pass(
            check_type,
            severity,
            "No salary range configured for this role",
            format!(
                "No salary range is defined for level {} in {}; range compliance was not evaluated.",
                employee.level, employee.country
            ),
        )
        .with_values(Some(employee.base_salary), Some(proposed), None);
    };

    let band = format!("{} to {} {}", range.min, range.max, range.currency);

    if proposed > range.max {
        let over_pct = overshoot_pct(proposed, range.max);
        if !params.allow_above_max {
            return CheckResult::new(
                check_type,
                severity.violation_status(),
                severity,
                format!("Proposed salary is {}above the range maximum", approx(over_pct)),
                format!(
                    "The proposed salary of {} {} exceeds the maximum of the {} band{}.",
                    proposed,
                    employee.currency,
                    band,
                    by_pct(over_pct)
                ),
            )
            .with_values(Some(employee.base_salary), Some(proposed), Some(range.max));
        }

        return CheckResult::pass(
            check_type,
            severity,
            "Proposed salary is above the range maximum, which this rule allows",
            format!(
                "The proposed salary of {} {} is {}above the {} band; the rule permits salaries above the maximum.",
                proposed,
                employee.currency,
                approx(over_pct),
                band
            ),
        )
        .with_values(Some(employee.base_salary), Some(proposed), None);
    }

    if proposed < range.min {
        let under_pct = overshoot_pct(proposed, range.min);
        if !params.allow_below_min {
            return CheckResult::new(
                check_type,
                severity.violation_status(),
                severity,
                format!("Proposed salary is {}below the range minimum", approx(under_pct)),
                format!(
                    "The proposed salary of {} {} falls short of the minimum of the {} band{}.",
                    proposed,
                    employee.currency,
                    band,
                    by_pct(under_pct)
                ),
            )
            .with_values(Some(employee.base_salary), Some(proposed), Some(range.min));
        }

        return CheckResult::pass(
            check_type,
            severity,
            "Proposed salary is below the range minimum, which this rule allows",
            format!(
                "The proposed salary of {} {} is {}below the {} band; the rule permits salaries below the minimum.",
                proposed,
                employee.currency,
                approx(under_pct),
                band
            ),
        )
        .with_values(Some(employee.base_salary), Some(proposed), None);
    }

    let position_pct = range
        .position_of(proposed)
        .and_then(|position| position.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero));
    let headline = match position_pct {
        Some(pct) => format!("Proposed salary sits at {}% of the salary range", pct),
        None => "Proposed salary is within the salary range".to_string(),
    };
    CheckResult::new(
        check_type,
        CheckStatus::Pass,
        severity,
        headline,
        format!(
            "The proposed salary of {} {} is within the {} band (midpoint {}).",
            proposed, employee.currency, band, range.mid
        ),
    )
    .with_values(Some(employee.base_salary), Some(proposed), None)
}

/// Distance from `value` to `bound` as a percentage of `bound`, rounded for
/// display. `None` for a zero bound or when the percentage overflows.
fn overshoot_pct(value: Decimal, bound: Decimal) -> Option<Decimal> {
    if bound.is_zero() {
        return None;
    }
    let pct = value
        .checked_sub(bound)?
        .abs()
        .checked_div(bound)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    Some(round_pct(pct))
}

fn approx(pct: Option<Decimal>) -> String {
    pct.map(|p| format!("~{}% ", p)).unwrap_or_default()
}

fn by_pct(pct: Option<Decimal>) -> String {
    pct.map(|p| format!(" by {}%", p)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, SalaryRange};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_context(range: Option<(i64, i64, i64)>) -> EvaluationContext {
        EvaluationContext {
            employee: Employee {
                id: Uuid::new_v4(),
                organization_id: Uuid::new_v4(),
                base_salary: dec("95000"),
                gender: Some("F".to_string()),
                country: "DE".to_string(),
                job_family: Some("engineering".to_string()),
                level: "L4".to_string(),
                role_title: "Senior Engineer".to_string(),
                currency: "EUR".to_string(),
            },
            peers: vec![],
            salary_range: range.map(|(min, mid, max)| SalaryRange {
                min: Decimal::from(min),
                mid: Decimal::from(mid),
                max: Decimal::from(max),
                currency: "EUR".to_string(),
            }),
            recent_decisions: vec![],
        }
    }

    fn params(allow_above_max: bool, allow_below_min: bool) -> SalaryRangeParams {
        SalaryRangeParams {
            allow_above_max,
            allow_below_min,
        }
    }

    /// SR-001: above max with block severity blocks
    #[test]
    fn test_above_max_blocks_with_block_severity() {
        let context = create_test_context(Some((80000, 100000, 120000)));
        let result = check_salary_range(&context, dec("130000"), &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Block);
        assert_eq!(result.severity, Severity::Block);
        assert_eq!(result.check_type, CheckType::SalaryRangeCompliance);
        assert!(result.headline.contains("~8.3%"));
        assert!(result.headline.contains("above the range maximum"));
        assert_eq!(result.threshold, Some(dec("120000")));
        assert_eq!(result.projected_value, Some(dec("130000")));
        assert_eq!(result.current_value, Some(dec("95000")));
    }

    /// SR-002: above max with warning severity only warns
    #[test]
    fn test_above_max_warns_with_warning_severity() {
        let context = create_test_context(Some((80000, 100000, 120000)));
        let result =
            check_salary_range(&context, dec("130000"), &params(false, false), Severity::Warning);

        assert_eq!(result.status, CheckStatus::Warning);
        assert_eq!(result.severity, Severity::Warning);
    }

    /// SR-003: below min is a violation
    #[test]
    fn test_below_min_is_violation() {
        let context = create_test_context(Some((80000, 100000, 120000)));
        let result = check_salary_range(&context, dec("76000"), &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Block);
        assert!(result.headline.contains("~5%") || result.headline.contains("~5.0%"));
        assert!(result.headline.contains("below the range minimum"));
        assert_eq!(result.threshold, Some(dec("80000")));
    }

    /// SR-004: allowed sides pass
    #[test]
    fn test_allowed_sides_pass() {
        let context = create_test_context(Some((80000, 100000, 120000)));

        let above = check_salary_range(&context, dec("130000"), &params(true, false), Severity::Block);
        assert_eq!(above.status, CheckStatus::Pass);
        assert!(above.headline.contains("which this rule allows"));

        let below = check_salary_range(&context, dec("70000"), &params(false, true), Severity::Block);
        assert_eq!(below.status, CheckStatus::Pass);
        assert!(below.threshold.is_none());
    }

    /// SR-005: allowing one side does not allow the other
    #[test]
    fn test_allowing_above_max_still_enforces_min() {
        let context = create_test_context(Some((80000, 100000, 120000)));
        let result = check_salary_range(&context, dec("70000"), &params(true, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Block);
    }

    /// SR-006: missing range passes
    #[test]
    fn test_missing_range_passes() {
        let context = create_test_context(None);
        let result = check_salary_range(&context, dec("1000000"), &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.headline.contains("No salary range configured"));
        assert!(result.detail.contains("L4"));
    }

    #[test]
    fn test_within_range_reports_position() {
        let context = create_test_context(Some((80000, 100000, 120000)));
        let result = check_salary_range(&context, dec("90000"), &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.headline.contains("25%"));
    }

    #[test]
    fn test_bounds_are_inside_the_range() {
        let context = create_test_context(Some((80000, 100000, 120000)));

        let at_max = check_salary_range(&context, dec("120000"), &params(false, false), Severity::Block);
        assert_eq!(at_max.status, CheckStatus::Pass);
        assert!(at_max.headline.contains("100%"));

        let at_min = check_salary_range(&context, dec("80000"), &params(false, false), Severity::Block);
        assert_eq!(at_min.status, CheckStatus::Pass);
    }

    #[test]
    fn test_degenerate_range_reports_midpoint() {
        let context = create_test_context(Some((100000, 100000, 100000)));
        let result = check_salary_range(&context, dec("100000"), &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.headline.contains("50%"));
    }

    #[test]
    fn test_position_rounds_half_away_from_zero() {
        let context = create_test_context(Some((80000, 80100, 80200)));
        let result = check_salary_range(&context, dec("80001"), &params(false, false), Severity::Block);

        assert!(result.headline.contains("sits at 1% of"));
    }

    #[test]
    fn test_extreme_proposal_still_violates_without_percentage() {
        let context = create_test_context(Some((0, 0, 1)));
        let result = check_salary_range(&context, Decimal::MAX, &params(false, false), Severity::Block);

        assert_eq!(result.status, CheckStatus::Block);
        assert_eq!(result.headline, "Proposed salary is above the range maximum");
        assert_eq!(result.threshold, Some(dec("1")));
    }
}
