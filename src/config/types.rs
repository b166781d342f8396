//! Typed check parameters.
//!
//! Rules store their thresholds as a free-form key/value map. Each check decodes
//! that map into its own parameter struct; every field defaults independently
//! when its key is absent.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::PolicyRule;

/// Parameters for the salary range compliance check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalaryRangeParams {
    /// Whether a proposal above the range maximum is acceptable.
    pub allow_above_max: bool,
    /// Whether a proposal below the range minimum is acceptable.
    pub allow_below_min: bool,
}

/// Parameters for the peer median deviation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedianDeviationParams {
    /// Deviation from the peer median, in percent, that raises a warning.
    pub warning_deviation_pct: Decimal,
    /// Deviation from the peer median, in percent, that blocks.
    pub block_deviation_pct: Decimal,
}

impl Default for MedianDeviationParams {
    fn default() -> Self {
        Self {
            warning_deviation_pct: Decimal::from(10),
            block_deviation_pct: Decimal::from(20),
        }
    }
}

/// Parameters for the gender gap impact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenderGapParams {
    /// Absolute projected gap, in percent, that raises a warning.
    pub warning_threshold_pct: Decimal,
    /// Absolute projected gap, in percent, that blocks.
    pub block_threshold_pct: Decimal,
}

impl Default for GenderGapParams {
    fn default() -> Self {
        Self {
            warning_threshold_pct: Decimal::from(4),
            block_threshold_pct: Decimal::from(5),
        }
    }
}

/// Parameters for the historical consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoricalConsistencyParams {
    /// Deviation from the recent average, in percent, that counts as a violation.
    pub warning_deviation_pct: Decimal,
}

impl Default for HistoricalConsistencyParams {
    fn default() -> Self {
        Self {
            warning_deviation_pct: Decimal::from(15),
        }
    }
}

/// Parameters for the change magnitude check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeMagnitudeParams {
    /// Absolute change, in percent, that raises a warning.
    pub warning_change_pct: Decimal,
    /// Absolute change, in percent, that blocks.
    pub block_change_pct: Decimal,
}

impl Default for ChangeMagnitudeParams {
    fn default() -> Self {
        Self {
            warning_change_pct: Decimal::from(15),
            block_change_pct: Decimal::from(25),
        }
    }
}

/// Decodes a rule's `params` map into a typed parameter struct.
///
/// Missing keys take the struct's defaults and unrelated keys are ignored. A key
/// that is present with the wrong type is a configuration error.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::config::{MedianDeviationParams, decode_params};
/// use pay_policy_engine::models::{PolicyRule, Severity};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let mut rule = PolicyRule {
///     id: Uuid::nil(),
///     name: "Peer median".to_string(),
///     check_type: "MEDIAN_DEVIATION".to_string(),
///     enabled: true,
///     severity: Severity::Warning,
///     params: Default::default(),
///     applies_to_decision_types: vec![],
///     applies_to_countries: vec![],
/// };
/// rule.params.insert("blockDeviationPct".to_string(), 30.into());
///
/// let params: MedianDeviationParams = decode_params(&rule).unwrap();
/// assert_eq!(params.warning_deviation_pct, Decimal::from(10));
/// assert_eq!(params.block_deviation_pct, Decimal::from(30));
/// ```
pub fn decode_params<T: DeserializeOwned>(rule: &PolicyRule) -> EngineResult<T> {
    serde_json::from_value(Value::Object(rule.params.clone())).map_err(|e| {
        EngineError::InvalidRuleParams {
            rule_id: rule.id,
            check_type: rule.check_type.clone(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use serde_json::json;
    use uuid::Uuid;

    fn rule_with_params(params: Value) -> PolicyRule {
        PolicyRule {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            check_type: "TEST".to_string(),
            enabled: true,
            severity: Severity::Block,
            params: params.as_object().cloned().unwrap_or_default(),
            applies_to_decision_types: vec![],
            applies_to_countries: vec![],
        }
    }

    #[test]
    fn test_empty_params_use_documented_defaults() {
        let rule = rule_with_params(json!({}));

        let range: SalaryRangeParams = decode_params(&rule).unwrap();
        assert!(!range.allow_above_max);
        assert!(!range.allow_below_min);

        let median: MedianDeviationParams = decode_params(&rule).unwrap();
        assert_eq!(median.warning_deviation_pct, Decimal::from(10));
        assert_eq!(median.block_deviation_pct, Decimal::from(20));

        let gap: GenderGapParams = decode_params(&rule).unwrap();
        assert_eq!(gap.warning_threshold_pct, Decimal::from(4));
        assert_eq!(gap.block_threshold_pct, Decimal::from(5));

        let history: HistoricalConsistencyParams = decode_params(&rule).unwrap();
        assert_eq!(history.warning_deviation_pct, Decimal::from(15));

        let change: ChangeMagnitudeParams = decode_params(&rule).unwrap();
        assert_eq!(change.warning_change_pct, Decimal::from(15));
        assert_eq!(change.block_change_pct, Decimal::from(25));
    }

    #[test]
    fn test_fields_default_independently() {
        let rule = rule_with_params(json!({ "warningChangePct": 7.5 }));

        let change: ChangeMagnitudeParams = decode_params(&rule).unwrap();
        assert_eq!(change.warning_change_pct, Decimal::new(75, 1));
        assert_eq!(change.block_change_pct, Decimal::from(25));
    }

    #[test]
    fn test_boolean_flags_are_read() {
        let rule = rule_with_params(json!({ "allowAboveMax": true }));

        let range: SalaryRangeParams = decode_params(&rule).unwrap();
        assert!(range.allow_above_max);
        assert!(!range.allow_below_min);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let rule = rule_with_params(json!({ "note": "legacy", "blockThresholdPct": 6 }));

        let gap: GenderGapParams = decode_params(&rule).unwrap();
        assert_eq!(gap.block_threshold_pct, Decimal::from(6));
    }

    #[test]
    fn test_wrong_type_is_invalid_rule_params() {
        let rule = rule_with_params(json!({ "allowAboveMax": [1, 2] }));

        let result: EngineResult<SalaryRangeParams> = decode_params(&rule);
        match result {
            Err(EngineError::InvalidRuleParams { check_type, .. }) => {
                assert_eq!(check_type, "TEST");
            }
            other => panic!("Expected InvalidRuleParams, got {:?}", other),
        }
    }
}
