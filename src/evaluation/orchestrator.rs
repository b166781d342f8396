//! Evaluation orchestrator.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use super::context::build_context;
use crate::checks::dispatch;
use crate::data_access::DataAccess;
use crate::error::{EngineError, EngineResult};
use crate::models::{EvaluationResult, PolicyRule};

/// Evaluates proposed pay changes against an organization's policy rules.
///
/// The evaluator holds no state between calls besides its data source, so one
/// instance can serve concurrent evaluations.
///
/// # Example
///
/// ```
/// use pay_policy_engine::data_access::InMemoryDataAccess;
/// use pay_policy_engine::evaluation::PolicyEvaluator;
/// use pay_policy_engine::models::{CheckStatus, Employee};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// # #[tokio::main]
/// # async fn main() -> pay_policy_engine::error::EngineResult<()> {
/// let org = Uuid::new_v4();
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     organization_id: org,
///     base_salary: Decimal::from(60000),
///     gender: Some("F".to_string()),
///     country: "DE".to_string(),
///     job_family: Some("engineering".to_string()),
///     level: "L3".to_string(),
///     role_title: "Engineer".to_string(),
///     currency: "EUR".to_string(),
/// };
///
/// let evaluator = PolicyEvaluator::new(InMemoryDataAccess::new().with_employee(employee.clone()));
/// let result = evaluator
///     .evaluate(employee.id, org, "MERIT_INCREASE", Decimal::from(63000))
///     .await?;
///
/// // No rules configured for the organization.
/// assert_eq!(result.overall_status, CheckStatus::Pass);
/// assert!(result.checks.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PolicyEvaluator<D> {
    data: D,
}

impl<D: DataAccess> PolicyEvaluator<D> {
    /// Creates an evaluator reading from `data`.
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// Evaluates a proposed base salary, using today's date (UTC) for the
    /// historical window.
    pub async fn evaluate(
        &self,
        employee_id: Uuid,
        organization_id: Uuid,
        decision_type: &str,
        proposed_pay_after_base: Decimal,
    ) -> EngineResult<EvaluationResult> {
        self.evaluate_as_of(
            employee_id,
            organization_id,
            decision_type,
            proposed_pay_after_base,
            Utc::now().date_naive(),
        )
        .await
    }

    /// Evaluates a proposed base salary as of `as_of`.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the employee does not exist in the organization
    /// - `InvalidRuleParams` if an applicable rule has malformed parameters
    /// - any error returned by the data source, unchanged
    pub async fn evaluate_as_of(
        &self,
        employee_id: Uuid,
        organization_id: Uuid,
        decision_type: &str,
        proposed_pay_after_base: Decimal,
        as_of: NaiveDate,
    ) -> EngineResult<EvaluationResult> {
        info!(
            employee_id = %employee_id,
            organization_id = %organization_id,
            decision_type,
            "Evaluating pay decision"
        );

        let employee = self
            .data
            .get_employee(employee_id, organization_id)
            .await?
            .filter(|e| e.organization_id == organization_id)
            .ok_or(EngineError::EmployeeNotFound {
                employee_id,
                organization_id,
            })?;

        let rules = self.data.list_enabled_policy_rules(organization_id).await?;
        let applicable: Vec<PolicyRule> = rules
            .into_iter()
            .filter(|rule| rule.enabled && rule.applies_to(decision_type, &employee.country))
            .collect();

        if applicable.is_empty() {
            info!(
                employee_id = %employee_id,
                "No applicable policy rules; decision passes"
            );
            return Ok(EvaluationResult::from_checks(Vec::new()));
        }

        let context =
            build_context(&self.data, employee, organization_id, decision_type, as_of).await?;

        let mut checks = Vec::with_capacity(applicable.len());
        for rule in &applicable {
            if let Some(result) = dispatch(rule, &context, proposed_pay_after_base)? {
                debug!(
                    rule_id = %rule.id,
                    check_type = %result.check_type,
                    status = ?result.status,
                    "Policy check completed"
                );
                checks.push(result);
            }
        }

        let result = EvaluationResult::from_checks(checks);
        info!(
            employee_id = %employee_id,
            overall_status = ?result.overall_status,
            checks = result.checks.len(),
            "Pay decision evaluated"
        );

        Ok(result)
    }
}
