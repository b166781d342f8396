//! In-memory implementation of the data-access contract.
//!
//! Holds an immutable snapshot of employees, rules, salary ranges and pay
//! decisions, and answers the engine's queries with the same filters a
//! database-backed implementation applies.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DataAccess;
use crate::error::EngineResult;
use crate::models::{
    ComparatorGroup, ComparatorPeer, Employee, PolicyRule, RecentSimilarDecision, SalaryRange,
};

/// A pay decision as stored by the decision workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedDecision {
    /// The organization that made the decision.
    pub organization_id: Uuid,
    /// The employee the decision applied to.
    pub employee_id: Uuid,
    /// Decision type tag (e.g., "PROMOTION").
    pub decision_type: String,
    /// The employee's level at the time of the decision.
    pub level: String,
    /// Base salary before the decision.
    pub pay_before_base: Decimal,
    /// Base salary after the decision.
    pub pay_after_base: Decimal,
    /// The date the decision took effect.
    pub effective_date: NaiveDate,
    /// Whether the decision completed its approval workflow.
    pub finalized: bool,
}

#[derive(Debug, Clone)]
struct SalaryRangeEntry {
    organization_id: Uuid,
    country: String,
    job_family: Option<String>,
    level: String,
    range: SalaryRange,
}

/// A [`DataAccess`] implementation backed by in-process collections.
///
/// # Example
///
/// ```
/// use pay_policy_engine::config::RuleCatalog;
/// use pay_policy_engine::data_access::InMemoryDataAccess;
/// use uuid::Uuid;
///
/// let org = Uuid::new_v4();
/// let catalog = RuleCatalog::from_yaml_str(
///     "rules:\n  - id: 3f1e2d4c-0000-4000-8000-000000000001\n    checkType: CHANGE_MAGNITUDE\n    severity: WARNING\n",
/// )
/// .unwrap();
///
/// let data = InMemoryDataAccess::new().with_rules(org, catalog.into_rules());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataAccess {
    employees: Vec<Employee>,
    rules: HashMap<Uuid, Vec<PolicyRule>>,
    salary_ranges: Vec<SalaryRangeEntry>,
    decisions: Vec<FinalizedDecision>,
}

impl InMemoryDataAccess {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds policy rules for an organization, enabled or not.
    pub fn with_rules(mut self, organization_id: Uuid, rules: Vec<PolicyRule>) -> Self {
        self.rules.entry(organization_id).or_default().extend(rules);
        self
    }

    /// Adds a salary range for `(country, job_family, level)`.
    pub fn with_salary_range(
        mut self,
        organization_id: Uuid,
        country: &str,
        job_family: Option<&str>,
        level: &str,
        range: SalaryRange,
    ) -> Self {
        self.salary_ranges.push(SalaryRangeEntry {
            organization_id,
            country: country.to_string(),
            job_family: job_family.map(str::to_string),
            level: level.to_string(),
            range,
        });
        self
    }

    /// Adds a pay decision.
    pub fn with_decision(mut self, decision: FinalizedDecision) -> Self {
        self.decisions.push(decision);
        self
    }
}

#[async_trait]
impl DataAccess for InMemoryDataAccess {
    async fn get_employee(
        &self,
        employee_id: Uuid,
        organization_id: Uuid,
    ) -> EngineResult<Option<Employee>> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.id == employee_id && e.organization_id == organization_id)
            .cloned())
    }

    async fn list_enabled_policy_rules(
        &self,
        organization_id: Uuid,
    ) -> EngineResult<Vec<PolicyRule>> {
        Ok(self
            .rules
            .get(&organization_id)
            .map(|rules| rules.iter().filter(|r| r.enabled).cloned().collect())
            .unwrap_or_default())
    }

    async fn list_comparator_peers(
        &self,
        organization_id: Uuid,
        group: &ComparatorGroup,
    ) -> EngineResult<Vec<ComparatorPeer>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.organization_id == organization_id && e.comparator_group() == *group)
            .map(|e| ComparatorPeer {
                base_salary: e.base_salary,
                gender: e.gender.clone(),
            })
            .collect())
    }

    async fn find_salary_range(
        &self,
        organization_id: Uuid,
        country: &str,
        job_family: Option<&str>,
        level: &str,
    ) -> EngineResult<Option<SalaryRange>> {
        Ok(self
            .salary_ranges
            .iter()
            .find(|entry| {
                entry.organization_id == organization_id
                    && entry.country == country
                    && entry.job_family.as_deref() == job_family
                    && entry.level == level
            })
            .map(|entry| entry.range.clone()))
    }

    async fn list_recent_similar_decisions(
        &self,
        organization_id: Uuid,
        level: &str,
        decision_type: &str,
        since: NaiveDate,
        limit: usize,
    ) -> EngineResult<Vec<RecentSimilarDecision>> {
        let mut matching: Vec<&FinalizedDecision> = self
            .decisions
            .iter()
            .filter(|d| {
                d.finalized
                    && d.organization_id == organization_id
                    && d.level == level
                    && d.decision_type == decision_type
                    && d.effective_date >= since
            })
            .collect();

        matching.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));

        Ok(matching
            .into_iter()
            .take(limit)
            .map(|d| RecentSimilarDecision {
                pay_before_base: d.pay_before_base,
                pay_after_base: d.pay_after_base,
                effective_date: d.effective_date,
            })
            .collect())
    }
}
