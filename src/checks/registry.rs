//! Check registry.
//!
//! Maps the check-type identifiers stored on policy rules to the check
//! functions. Identifiers the engine does not know are skipped, so rules
//! written for a newer engine do not break older ones.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    check_change_magnitude, check_gender_gap, check_historical_consistency,
    check_median_deviation, check_salary_range,
};
use crate::config::decode_params;
use crate::error::EngineResult;
use crate::evaluation::EvaluationContext;
use crate::models::{CheckResult, PolicyRule};

/// The checks the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckType {
    /// Proposed salary against the role's salary band.
    SalaryRangeCompliance,
    /// Proposed salary against the comparator group median.
    MedianDeviation,
    /// Projected effect on the comparator group's gender pay gap.
    GenderGapImpact,
    /// Proposed salary against recent similar decisions.
    HistoricalConsistency,
    /// Relative size of the change to the current salary.
    ChangeMagnitude,
}

impl CheckType {
    /// Every registered check.
    pub const ALL: [CheckType; 5] = [
        CheckType::SalaryRangeCompliance,
        CheckType::MedianDeviation,
        CheckType::GenderGapImpact,
        CheckType::HistoricalConsistency,
        CheckType::ChangeMagnitude,
    ];

    /// Returns the identifier used for this check on policy rules.
    pub fn identifier(self) -> &'static str {
        match self {
            CheckType::SalaryRangeCompliance => "SALARY_RANGE_COMPLIANCE",
            CheckType::MedianDeviation => "MEDIAN_DEVIATION",
            CheckType::GenderGapImpact => "GENDER_GAP_IMPACT",
            CheckType::HistoricalConsistency => "HISTORICAL_CONSISTENCY",
            CheckType::ChangeMagnitude => "CHANGE_MAGNITUDE",
        }
    }

    /// Looks up a check by identifier. Returns `None` for unknown identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::checks::CheckType;
    ///
    /// assert_eq!(
    ///     CheckType::from_identifier("MEDIAN_DEVIATION"),
    ///     Some(CheckType::MedianDeviation)
    /// );
    /// assert_eq!(CheckType::from_identifier("TENURE_PARITY"), None);
    /// ```
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|check| check.identifier() == identifier)
    }

    /// Runs this check for `rule` against the shared context.
    ///
    /// Fails only if the rule's parameters cannot be decoded.
    pub fn run(
        self,
        rule: &PolicyRule,
        context: &EvaluationContext,
        proposed: Decimal,
    ) -> EngineResult<CheckResult> {
        let severity = rule.severity;
        let result = match self {
            CheckType::SalaryRangeCompliance => {
                check_salary_range(context, proposed, &decode_params(rule)?, severity)
            }
            CheckType::MedianDeviation => {
                check_median_deviation(context, proposed, &decode_params(rule)?, severity)
            }
            CheckType::GenderGapImpact => {
                check_gender_gap(context, proposed, &decode_params(rule)?, severity)
            }
            CheckType::HistoricalConsistency => {
                check_historical_consistency(context, proposed, &decode_params(rule)?, severity)
            }
            CheckType::ChangeMagnitude => {
                check_change_magnitude(context, proposed, &decode_params(rule)?, severity)
            }
        };
        Ok(result)
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Runs the check a rule references.
///
/// Returns `Ok(None)` when the rule names a check type the registry does not
/// know.
pub fn dispatch(
    rule: &PolicyRule,
    context: &EvaluationContext,
    proposed: Decimal,
) -> EngineResult<Option<CheckResult>> {
    let Some(check_type) = CheckType::from_identifier(&rule.check_type) else {
        warn!(
            rule_id = %rule.id,
            check_type = %rule.check_type,
            "Skipping rule with unknown check type"
        );
        return Ok(None);
    };

    check_type.run(rule, context, proposed).map(Some)
}
