//! Property tests for the pay policy engine.
//!
//! These cover invariants that must hold for any input:
//! - A rule with WARNING severity never produces a BLOCK
//! - The overall status is the worst individual status
//! - The median lies within the range of its inputs

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use pay_policy_engine::checks::{CheckType, dispatch, median};
use pay_policy_engine::evaluation::EvaluationContext;
use pay_policy_engine::models::{
    CheckResult, CheckStatus, ComparatorPeer, Employee, EvaluationResult, PolicyRule,
    RecentSimilarDecision, SalaryRange, Severity,
};

fn gender_label() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("F".to_string())),
        Just(Some("male".to_string())),
        Just(Some("diverse".to_string())),
        Just(None),
    ]
}

fn peers() -> impl Strategy<Value = Vec<ComparatorPeer>> {
    prop::collection::vec(
        (0i64..300_000, gender_label()).prop_map(|(salary, gender)| ComparatorPeer {
            base_salary: Decimal::from(salary),
            gender,
        }),
        0..12,
    )
}

fn history() -> impl Strategy<Value = Vec<RecentSimilarDecision>> {
    prop::collection::vec(
        (0i64..300_000).prop_map(|after| RecentSimilarDecision {
            pay_before_base: Decimal::from(after),
            pay_after_base: Decimal::from(after),
            effective_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        }),
        0..6,
    )
}

fn salary_range() -> impl Strategy<Value = Option<SalaryRange>> {
    prop::option::of((1i64..200_000, 1i64..100_000).prop_map(|(min, width)| SalaryRange {
        min: Decimal::from(min),
        mid: Decimal::from(min + width / 2),
        max: Decimal::from(min + width),
        currency: "EUR".to_string(),
    }))
}

fn context() -> impl Strategy<Value = EvaluationContext> {
    (0i64..300_000, gender_label(), peers(), salary_range(), history()).prop_map(
        |(salary, gender, peers, salary_range, recent_decisions)| EvaluationContext {
            employee: Employee {
                id: Uuid::nil(),
                organization_id: Uuid::nil(),
                base_salary: Decimal::from(salary),
                gender,
                country: "DE".to_string(),
                job_family: Some("engineering".to_string()),
                level: "L3".to_string(),
                role_title: "Engineer".to_string(),
                currency: "EUR".to_string(),
            },
            peers,
            salary_range,
            recent_decisions,
        },
    )
}

fn warning_rule(check: CheckType, warning: u32, block: u32) -> PolicyRule {
    let params = json!({
        "warningDeviationPct": warning,
        "blockDeviationPct": block,
        "warningThresholdPct": warning,
        "blockThresholdPct": block,
        "warningChangePct": warning,
        "blockChangePct": block,
    });
    PolicyRule {
        id: Uuid::nil(),
        name: "warning only".to_string(),
        check_type: check.identifier().to_string(),
        enabled: true,
        severity: Severity::Warning,
        params: params.as_object().cloned().unwrap(),
        applies_to_decision_types: vec![],
        applies_to_countries: vec![],
    }
}

fn status() -> impl Strategy<Value = CheckStatus> {
    prop_oneof![
        Just(CheckStatus::Pass),
        Just(CheckStatus::Warning),
        Just(CheckStatus::Block),
    ]
}

proptest! {
    #[test]
    fn warning_severity_never_blocks(
        context in context(),
        proposed in 0i64..1_000_000,
        warning in 0u32..40,
        block in 0u32..40,
    ) {
        for check in CheckType::ALL {
            let rule = warning_rule(check, warning, block);
            let result = dispatch(&rule, &context, Decimal::from(proposed))
                .unwrap()
                .unwrap();

            prop_assert_ne!(result.status, CheckStatus::Block);
            prop_assert_eq!(result.severity, Severity::Warning);
        }
    }

    #[test]
    fn overall_status_is_worst_check(statuses in prop::collection::vec(status(), 0..10)) {
        let checks: Vec<CheckResult> = statuses
            .iter()
            .map(|s| CheckResult::new(CheckType::MedianDeviation, *s, Severity::Block, "h", "d"))
            .collect();

        let result = EvaluationResult::from_checks(checks);

        let expected = statuses.iter().copied().max().unwrap_or(CheckStatus::Pass);
        prop_assert_eq!(result.overall_status, expected);
        prop_assert_eq!(result.checks.len(), statuses.len());
    }

    #[test]
    fn median_lies_within_input_range(values in prop::collection::vec(0i64..1_000_000, 1..50)) {
        let decimals: Vec<Decimal> = values.iter().copied().map(Decimal::from).collect();
        let m = median(&decimals).unwrap();

        let min = decimals.iter().min().unwrap();
        let max = decimals.iter().max().unwrap();
        prop_assert!(*min <= m && m <= *max);
    }
}
