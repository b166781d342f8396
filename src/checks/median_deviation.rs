//! Peer median deviation check.
//!
//! Compares a proposed salary with the median salary of the employee's
//! comparator group.

use rust_decimal::Decimal;

use super::CheckType;
use super::statistics::{median, percent_change, round_pct};
use super::thresholds::{grade, reported_threshold};
use crate::config::MedianDeviationParams;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, Severity};

/// Minimum comparator group size for a meaningful median.
pub const MIN_PEERS_FOR_MEDIAN: usize = 2;

/// Checks how far a proposed salary deviates from the peer median.
///
/// Groups with fewer than two peers, a zero median or a deviation too large
/// to express as a percentage pass with an explanation. Otherwise the absolute
/// deviation in percent is graded against the rule's thresholds.
///
/// The result carries the peer median as `current_value`, the rounded
/// deviation as `projected_value` and the threshold it was graded against.
pub fn check_median_deviation(
    context: &EvaluationContext,
    proposed: Decimal,
    params: &MedianDeviationParams,
    severity: Severity,
) -> CheckResult {
    let check_type = CheckType::MedianDeviation;

    let salaries: Vec<Decimal> = context.peers.iter().map(|p| p.base_salary).collect();
    if salaries.len() < MIN_PEERS_FOR_MEDIAN {
        return CheckResult::pass(
            check_type,
            severity,
            "Insufficient peers for median comparison",
            format!(
                "The comparator group has {} peer(s); at least {} are needed to compare against a median.",
                salaries.len(),
                MIN_PEERS_FOR_MEDIAN
            ),
        );
    }

    let peer_median = median(&salaries).unwrap_or_default();
    let Some(signed_pct) = percent_change(proposed, peer_median) else {
        if !peer_median.is_zero() {
            return CheckResult::pass(
                check_type,
                severity,
                "Deviation from the peer median is out of range; comparison skipped",
                format!(
                    "The proposal of {} is too far from the peer median of {} to express as a percentage.",
                    proposed, peer_median
                ),
            );
        }
        return CheckResult::pass(
            check_type,
            severity,
            "Peer median is zero; comparison skipped",
            format!(
                "The median salary of the {} peers is zero, so a relative deviation cannot be computed.",
                salaries.len()
            ),
        );
    };

    let deviation_pct = signed_pct.abs();
    let status = grade(
        deviation_pct,
        params.warning_deviation_pct,
        params.block_deviation_pct,
        severity,
    );
    let threshold = reported_threshold(
        status,
        params.warning_deviation_pct,
        params.block_deviation_pct,
    );
    let shown_pct = round_pct(deviation_pct);

    let headline = if signed_pct.is_zero() {
        "Proposed salary matches the peer median".to_string()
    } else {
        let direction = if signed_pct.is_sign_positive() {
            "above"
        } else {
            "below"
        };
        format!("Proposed salary is {}% {} the peer median", shown_pct, direction)
    };

    CheckResult::new(
        check_type,
        status,
        severity,
        headline,
        format!(
            "Peer median across {} comparator peers is {} {}; the proposal of {} deviates by {}% (warning at {}%, block at {}%).",
            salaries.len(),
            peer_median,
            context.employee.currency,
            proposed,
            shown_pct,
            params.warning_deviation_pct,
            params.block_deviation_pct
        ),
    )
    .with_values(Some(peer_median), Some(shown_pct), Some(threshold))
}
