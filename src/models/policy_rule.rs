//! Policy rule model.
//!
//! Rules are authored by administrators elsewhere; the engine only reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::CheckStatus;

/// The maximum verdict a rule is allowed to produce.
///
/// Severity is a ceiling, not a floor: a `Warning` rule can never block a
/// decision, no matter how far a measurement exceeds its block threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The rule may at most warn.
    Warning,
    /// The rule may block the decision.
    Block,
}

impl Severity {
    /// Returns the status a violation of a rule with this severity produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::models::{CheckStatus, Severity};
    ///
    /// assert_eq!(Severity::Warning.violation_status(), CheckStatus::Warning);
    /// assert_eq!(Severity::Block.violation_status(), CheckStatus::Block);
    /// ```
    pub fn violation_status(self) -> CheckStatus {
        match self {
            Severity::Warning => CheckStatus::Warning,
            Severity::Block => CheckStatus::Block,
        }
    }
}

/// A configured fairness or consistency policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    /// Unique identifier of the rule.
    pub id: Uuid,
    /// Administrator-facing rule name.
    #[serde(default)]
    pub name: String,
    /// Identifier of the check this rule runs (e.g., "MEDIAN_DEVIATION").
    pub check_type: String,
    /// Whether the rule is active.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// The ceiling verdict this rule may produce.
    pub severity: Severity,
    /// Check-specific parameters; missing keys fall back to documented defaults.
    #[serde(default)]
    pub params: Map<String, Value>,
    /// Decision types the rule applies to. Empty means all.
    #[serde(default)]
    pub applies_to_decision_types: Vec<String>,
    /// Country codes the rule applies to. Empty means all.
    #[serde(default)]
    pub applies_to_countries: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl PolicyRule {
    /// Returns true if the rule covers the given decision type and country.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::models::{PolicyRule, Severity};
    /// use uuid::Uuid;
    ///
    /// let rule = PolicyRule {
    ///     id: Uuid::nil(),
    ///     name: "Band compliance in Germany".to_string(),
    ///     check_type: "SALARY_RANGE_COMPLIANCE".to_string(),
    ///     enabled: true,
    ///     severity: Severity::Block,
    ///     params: Default::default(),
    ///     applies_to_decision_types: vec![],
    ///     applies_to_countries: vec!["DE".to_string()],
    /// };
    ///
    /// assert!(rule.applies_to("PROMOTION", "DE"));
    /// assert!(!rule.applies_to("PROMOTION", "FR"));
    /// ```
    pub fn applies_to(&self, decision_type: &str, country: &str) -> bool {
        let type_matches = self.applies_to_decision_types.is_empty()
            || self
                .applies_to_decision_types
                .iter()
                .any(|t| t == decision_type);
        let country_matches = self.applies_to_countries.is_empty()
            || self.applies_to_countries.iter().any(|c| c == country);

        type_matches && country_matches
    }
}
