//! Gender gap impact check.
//!
//! Simulates the effect of a proposed salary on the gender pay gap of the
//! employee's comparator group.

use std::fmt;

use rust_decimal::Decimal;

use super::CheckType;
use super::gender::Gender;
use super::statistics::{mean, median, round_pct};
use super::thresholds::{grade, reported_threshold};
use crate::config::GenderGapParams;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, Severity};

/// Both groups need at least this many members before the median is used.
pub const MIN_GROUP_SIZE_FOR_MEDIAN: usize = 3;

/// The statistic a gap was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapMetric {
    /// Median salary of each group.
    Median,
    /// Mean salary of each group (small samples).
    Mean,
}

impl fmt::Display for GapMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapMetric::Median => write!(f, "median"),
            GapMetric::Mean => write!(f, "mean"),
        }
    }
}

/// A computed gender pay gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderGap {
    /// `(men - women) / men * 100`, rounded to one decimal. Positive favours men.
    pub gap_pct: Decimal,
    /// The statistic used for both groups.
    pub metric: GapMetric,
}

impl GenderGap {
    fn direction(&self) -> &'static str {
        if self.gap_pct.is_sign_positive() && !self.gap_pct.is_zero() {
            "favouring men"
        } else if self.gap_pct.is_sign_negative() && !self.gap_pct.is_zero() {
            "favouring women"
        } else {
            "at parity"
        }
    }

    fn describe(&self) -> String {
        format!("{}% {}", self.gap_pct.abs(), self.direction())
    }
}

/// Computes the gender pay gap between two salary lists.
///
/// Uses the median when both groups have at least three members and the mean
/// otherwise. Returns `None` when either group is empty, the men's statistic
/// is zero or the gap does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::checks::{GapMetric, gender_gap};
/// use rust_decimal::Decimal;
///
/// let women = [50000, 52000, 51000].map(Decimal::from);
/// let men = [70000, 72000, 71000].map(Decimal::from);
///
/// let gap = gender_gap(&women, &men).unwrap();
/// assert_eq!(gap.metric, GapMetric::Median);
/// assert_eq!(gap.gap_pct, Decimal::new(282, 1));
/// ```
pub fn gender_gap(women: &[Decimal], men: &[Decimal]) -> Option<GenderGap> {
    if women.is_empty() || men.is_empty() {
        return None;
    }

    let metric = if women.len() >= MIN_GROUP_SIZE_FOR_MEDIAN && men.len() >= MIN_GROUP_SIZE_FOR_MEDIAN
    {
        GapMetric::Median
    } else {
        GapMetric::Mean
    };

    let (women_value, men_value) = match metric {
        GapMetric::Median => (median(women)?, median(men)?),
        GapMetric::Mean => (mean(women)?, mean(men)?),
    };

    if men_value.is_zero() {
        return None;
    }

    let gap = men_value
        .checked_sub(women_value)?
        .checked_div(men_value)?
        .checked_mul(Decimal::ONE_HUNDRED)?;

    Some(GenderGap {
        gap_pct: round_pct(gap),
        metric,
    })
}

/// Replaces the employee's entry in `salaries` with `proposed`.
///
/// Peers are anonymous, so the entry is found by salary alone (the caller has
/// already picked the list for the employee's gender). If two peers share that
/// salary the first one is replaced. If none matches, the employee is added.
fn substitute_salary(salaries: &mut Vec<Decimal>, current: Decimal, proposed: Decimal) {
    match salaries.iter().position(|s| *s == current) {
        Some(index) => salaries[index] = proposed,
        None => salaries.push(proposed),
    }
}

/// Checks the projected gender pay gap after applying a proposed salary.
///
/// Peers with unrecognized gender are excluded. If either gender has no
/// members the check passes for lack of data. The status is graded on the
/// absolute projected gap.
///
/// The result carries the current gap as `current_value`, the projected gap
/// as `projected_value` (both signed, positive favouring men) and the
/// threshold it was graded against.
pub fn check_gender_gap(
    context: &EvaluationContext,
    proposed: Decimal,
    params: &GenderGapParams,
    severity: Severity,
) -> CheckResult {
    let check_type = CheckType::GenderGapImpact;
    let employee = &context.employee;

    let mut women = Vec::new();
    let mut men = Vec::new();
    for peer in &context.peers {
        match Gender::classify(peer.gender.as_deref()) {
            Gender::Female => women.push(peer.base_salary),
            Gender::Male => men.push(peer.base_salary),
            Gender::Unknown => {}
        }
    }

    if women.is_empty() || men.is_empty() {
        return CheckResult::pass(
            check_type,
            severity,
            "Insufficient data for gender gap analysis",
            format!(
                "The comparator group has {} women and {} men with a recorded gender; both groups are needed to compute a gap.",
                women.len(),
                men.len()
            ),
        );
    }

    let Some(current) = gender_gap(&women, &men) else {
        return degenerate_result(check_type, severity);
    };

    let subject_gender = Gender::classify(employee.gender.as_deref());
    // An unmatched salary adds the employee to their group, so the group grows
    // by one and may cross the median threshold.
    match subject_gender {
        Gender::Female => substitute_salary(&mut women, employee.base_salary, proposed),
        Gender::Male => substitute_salary(&mut men, employee.base_salary, proposed),
        Gender::Unknown => {}
    }

    let Some(projected) = gender_gap(&women, &men) else {
        return degenerate_result(check_type, severity);
    };

    let magnitude = projected.gap_pct.abs();
    let status = grade(
        magnitude,
        params.warning_threshold_pct,
        params.block_threshold_pct,
        severity,
    );
    let threshold = reported_threshold(
        status,
        params.warning_threshold_pct,
        params.block_threshold_pct,
    );

    let headline = if projected.gap_pct.is_zero() {
        "Projected gender pay gap is at parity".to_string()
    } else {
        format!("Projected gender pay gap of {}", projected.describe())
    };

    let mut detail = format!(
        "Current gap is {} ({} pay of {} women vs {} men); with the proposed salary it becomes {} (warning at {}%, block at {}%).",
        current.describe(),
        projected.metric,
        women.len(),
        men.len(),
        projected.describe(),
        params.warning_threshold_pct,
        params.block_threshold_pct
    );
    if subject_gender == Gender::Unknown {
        detail.push_str(
            " The employee's gender is not recorded as female or male, so the proposal does not move the gap.",
        );
    }

    CheckResult::new(check_type, status, severity, headline, detail).with_values(
        Some(current.gap_pct),
        Some(projected.gap_pct),
        Some(threshold),
    )
}

fn degenerate_result(check_type: CheckType, severity: Severity) -> CheckResult {
    CheckResult::pass(
        check_type,
        severity,
        "Gender pay gap could not be computed for this comparator group",
        "The gap is expressed relative to men's pay, which is zero for this group or too far from women's pay to express as a percentage.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckStatus, ComparatorPeer, Employee};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_context(
        salary: i64,
        gender: Option<&str>,
        peers: &[(i64, Option<&str>)],
    ) -> EvaluationContext {
        EvaluationContext {
            employee: Employee {
                id: Uuid::new_v4(),
                organization_id: Uuid::new_v4(),
                base_salary: Decimal::from(salary),
                gender: gender.map(str::to_string),
                country: "DE".to_string(),
                job_family: Some("engineering".to_string()),
                level: "L3".to_string(),
                role_title: "Engineer".to_string(),
                currency: "EUR".to_string(),
            },
            peers: peers
                .iter()
                .map(|(s, g)| ComparatorPeer::new(Decimal::from(*s), *g))
                .collect(),
            salary_range: None,
            recent_decisions: vec![],
        }
    }

    const SIX_PEERS: &[(i64, Option<&str>)] = &[
        (50000, Some("F")),
        (52000, Some("F")),
        (51000, Some("F")),
        (70000, Some("M")),
        (72000, Some("M")),
        (71000, Some("M")),
    ];

    /// GG-001: raising a woman's pay shrinks a gap favouring men
    #[test]
    fn test_raise_for_woman_shrinks_gap() {
        let context = create_test_context(50000, Some("F"), SIX_PEERS);
        let result = check_gender_gap(
            &context,
            dec("71500"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.current_value, Some(dec("28.2")));
        assert_eq!(result.projected_value, Some(dec("26.8")));
        assert!(result.projected_value.unwrap().abs() < result.current_value.unwrap().abs());
        assert!(result.headline.contains("favouring men"));
        assert!(result.detail.contains("median"));
        assert_eq!(result.status, CheckStatus::Block);
        assert_eq!(result.threshold, Some(dec("5")));
    }

    /// GG-002: small groups use the mean and the sign can flip
    #[test]
    fn test_small_groups_use_mean_and_sign_flips() {
        let peers = &[
            (50000, Some("female")),
            (52000, Some("woman")),
            (70000, Some("male")),
            (72000, Some("man")),
        ];
        let context = create_test_context(50000, Some("F"), peers);
        let result = check_gender_gap(
            &context,
            dec("95000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.current_value, Some(dec("28.2")));
        assert_eq!(result.projected_value, Some(dec("-3.5")));
        assert!(result.headline.contains("favouring women"));
        assert!(result.detail.contains("mean"));
        assert_eq!(result.status, CheckStatus::Pass);
    }

    /// GG-003: a missing gender group passes
    #[test]
    fn test_missing_gender_group_passes() {
        let peers = &[(50000, Some("F")), (52000, Some("F")), (70000, None)];
        let context = create_test_context(50000, Some("F"), peers);
        let result = check_gender_gap(
            &context,
            dec("90000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.headline.contains("Insufficient data"));
        assert!(result.detail.contains("2 women and 0 men"));
    }

    /// GG-004: unknown-gender peers are excluded from the statistic
    #[test]
    fn test_unknown_gender_peers_are_excluded() {
        let mut peers = SIX_PEERS.to_vec();
        peers.push((10000, Some("diverse")));
        peers.push((200000, None));
        let context = create_test_context(50000, Some("F"), &peers);
        let result = check_gender_gap(
            &context,
            dec("50000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.current_value, Some(dec("28.2")));
        assert_eq!(result.projected_value, Some(dec("28.2")));
    }

    /// GG-005: warning severity never blocks
    #[test]
    fn test_warning_severity_caps_status() {
        let context = create_test_context(50000, Some("F"), SIX_PEERS);
        let result = check_gender_gap(
            &context,
            dec("50000"),
            &GenderGapParams::default(),
            Severity::Warning,
        );

        assert_eq!(result.status, CheckStatus::Warning);
        assert_eq!(result.threshold, Some(dec("4")));
    }

    #[test]
    fn test_subject_with_unknown_gender_does_not_move_gap() {
        let context = create_test_context(60000, Some("n/a"), SIX_PEERS);
        let result = check_gender_gap(
            &context,
            dec("150000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.current_value, result.projected_value);
        assert!(result.detail.contains("not recorded as female or male"));
    }

    #[test]
    fn test_raise_for_man_widens_gap() {
        let context = create_test_context(70000, Some("M"), SIX_PEERS);
        let result = check_gender_gap(
            &context,
            dec("90000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        // men become [90000, 72000, 71000], median 72000
        assert_eq!(result.projected_value, Some(dec("29.2")));
    }

    #[test]
    fn test_near_parity_passes() {
        let peers = &[
            (70000, Some("F")),
            (71000, Some("F")),
            (72000, Some("F")),
            (70000, Some("M")),
            (71500, Some("M")),
            (72000, Some("M")),
        ];
        let context = create_test_context(70000, Some("F"), peers);
        let result = check_gender_gap(
            &context,
            dec("71000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn test_gap_at_parity_has_no_direction() {
        let gap = gender_gap(&[dec("100")], &[dec("100")]).unwrap();
        assert_eq!(gap.gap_pct, Decimal::ZERO);
        assert_eq!(gap.direction(), "at parity");
    }

    #[test]
    fn test_zero_men_pay_is_undefined() {
        assert!(gender_gap(&[dec("100")], &[Decimal::ZERO]).is_none());
        assert!(gender_gap(&[], &[dec("100")]).is_none());
    }

    #[test]
    fn test_unmatched_employee_joins_group_and_can_switch_metric() {
        let peers = [
            (52000, Some("F")),
            (51000, Some("F")),
            (70000, Some("M")),
            (72000, Some("M")),
            (71000, Some("M")),
        ];
        let context = create_test_context(50000, Some("F"), &peers);
        let result = check_gender_gap(
            &context,
            dec("50000"),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert!(result.detail.contains("median pay of 3 women vs 3 men"));
    }

    #[test]
    fn test_gap_overflow_is_undefined() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        assert!(gender_gap(&[huge], &[dec("0.001")]).is_none());
    }

    #[test]
    fn test_extreme_proposal_passes_without_gap() {
        let context = create_test_context(1, Some("F"), &[(1, Some("F")), (1, Some("M"))]);
        let result = check_gender_gap(
            &context,
            Decimal::from_i128_with_scale(10i128.pow(27), 0),
            &GenderGapParams::default(),
            Severity::Block,
        );

        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.headline.contains("could not be computed"));
    }

    #[test]
    fn test_substitute_appends_when_no_entry_matches() {
        let mut salaries = vec![dec("100"), dec("200")];
        substitute_salary(&mut salaries, dec("150"), dec("300"));
        assert_eq!(salaries, vec![dec("100"), dec("200"), dec("300")]);

        substitute_salary(&mut salaries, dec("200"), dec("250"));
        assert_eq!(salaries, vec![dec("100"), dec("250"), dec("300")]);
    }
}
