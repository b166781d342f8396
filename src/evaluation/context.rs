//! Evaluation context assembly.
//!
//! Every check of one evaluation reads the same snapshot, so the comparator
//! data is gathered once, up front, before any check runs.

use chrono::{Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::data_access::DataAccess;
use crate::error::EngineResult;
use crate::models::{ComparatorPeer, Employee, RecentSimilarDecision, SalaryRange};

/// Length of the trailing window for similar decisions (twelve 30-day months).
pub const RECENT_DECISION_WINDOW_DAYS: i64 = 12 * 30;

/// Maximum number of similar decisions considered.
pub const RECENT_DECISION_LIMIT: usize = 50;

/// Everything the checks need to judge one proposed pay change.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    /// The employee whose pay is changing.
    pub employee: Employee,
    /// Anonymized members of the employee's comparator group.
    pub peers: Vec<ComparatorPeer>,
    /// The salary band for the employee's role, if one is configured.
    pub salary_range: Option<SalaryRange>,
    /// Finalized decisions of the same type and level, newest first.
    pub recent_decisions: Vec<RecentSimilarDecision>,
}

/// Returns the earliest effective date included in the similar-decision window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pay_policy_engine::evaluation::recent_decision_window_start;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(
///     recent_decision_window_start(as_of),
///     NaiveDate::from_ymd_opt(2025, 2, 5).unwrap()
/// );
/// ```
pub fn recent_decision_window_start(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_signed(Duration::days(RECENT_DECISION_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

/// Builds the evaluation context for `employee`.
///
/// The peer, salary range and history reads are independent and run
/// concurrently. If any of them fails the whole build fails; there is no
/// partial context.
pub async fn build_context<D: DataAccess + ?Sized>(
    data: &D,
    employee: Employee,
    organization_id: Uuid,
    decision_type: &str,
    as_of: NaiveDate,
) -> EngineResult<EvaluationContext> {
    let group = employee.comparator_group();
    let since = recent_decision_window_start(as_of);

    let (peers, salary_range, recent_decisions) = tokio::try_join!(
        data.list_comparator_peers(organization_id, &group),
        data.find_salary_range(
            organization_id,
            &employee.country,
            employee.job_family.as_deref(),
            &employee.level,
        ),
        data.list_recent_similar_decisions(
            organization_id,
            &employee.level,
            decision_type,
            since,
            RECENT_DECISION_LIMIT,
        ),
    )?;

    debug!(
        employee_id = %employee.id,
        peers = peers.len(),
        has_salary_range = salary_range.is_some(),
        recent_decisions = recent_decisions.len(),
        "Built evaluation context"
    );

    Ok(EvaluationContext {
        employee,
        peers,
        salary_range,
        recent_decisions,
    })
}
