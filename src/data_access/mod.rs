//! Data-access contract for the pay policy engine.
//!
//! The engine reads everything it needs through the [`DataAccess`] trait and
//! never writes. Persistence, query timeouts and retries belong to the
//! implementation; errors it returns are passed to the caller unchanged.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ComparatorGroup, ComparatorPeer, Employee, PolicyRule, RecentSimilarDecision, SalaryRange,
};

pub use memory::{FinalizedDecision, InMemoryDataAccess};

/// Read-only queries the evaluation engine depends on.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Returns the employee if it exists within the organization.
    async fn get_employee(
        &self,
        employee_id: Uuid,
        organization_id: Uuid,
    ) -> EngineResult<Option<Employee>>;

    /// Returns the organization's enabled policy rules.
    async fn list_enabled_policy_rules(&self, organization_id: Uuid)
    -> EngineResult<Vec<PolicyRule>>;

    /// Returns the anonymized members of a comparator group.
    async fn list_comparator_peers(
        &self,
        organization_id: Uuid,
        group: &ComparatorGroup,
    ) -> EngineResult<Vec<ComparatorPeer>>;

    /// Returns the salary range configured for a role, if any.
    async fn find_salary_range(
        &self,
        organization_id: Uuid,
        country: &str,
        job_family: Option<&str>,
        level: &str,
    ) -> EngineResult<Option<SalaryRange>>;

    /// Returns finalized decisions of `decision_type` at `level` effective on or
    /// after `since`, newest first, at most `limit` of them.
    async fn list_recent_similar_decisions(
        &self,
        organization_id: Uuid,
        level: &str,
        decision_type: &str,
        since: NaiveDate,
        limit: usize,
    ) -> EngineResult<Vec<RecentSimilarDecision>>;
}
