//! Employee model used during policy evaluation.
//!
//! The engine never mutates employees; it reads a snapshot owned by the
//! employee-management subsystem.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComparatorGroup;

/// A read-only snapshot of an employee, as needed by the policy checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The organization the employee belongs to.
    pub organization_id: Uuid,
    /// Current base salary, in the employee's currency.
    pub base_salary: Decimal,
    /// Free-text gender as recorded in the HR system, if any.
    #[serde(default)]
    pub gender: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g., "DE").
    pub country: String,
    /// Job family taxonomy entry, if the organization defines one for this role.
    #[serde(default)]
    pub job_family: Option<String>,
    /// The employee's level (e.g., "L3").
    pub level: String,
    /// The employee's role title.
    pub role_title: String,
    /// ISO 4217 currency code of the salary.
    pub currency: String,
}

impl Employee {
    /// Returns the comparator group this employee is benchmarked against.
    ///
    /// Uses `(country, job_family, level)` when the job family is known and
    /// falls back to `(country, level, role_title)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::models::{ComparatorGroup, Employee};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let employee = Employee {
    ///     id: Uuid::nil(),
    ///     organization_id: Uuid::nil(),
    ///     base_salary: Decimal::new(60000, 0),
    ///     gender: None,
    ///     country: "DE".to_string(),
    ///     job_family: None,
    ///     level: "L2".to_string(),
    ///     role_title: "Support Engineer".to_string(),
    ///     currency: "EUR".to_string(),
    /// };
    ///
    /// assert!(matches!(
    ///     employee.comparator_group(),
    ///     ComparatorGroup::ByRoleTitle { .. }
    /// ));
    /// ```
    pub fn comparator_group(&self) -> ComparatorGroup {
        match &self.job_family {
            Some(job_family) => ComparatorGroup::ByJobFamily {
                country: self.country.clone(),
                job_family: job_family.clone(),
                level: self.level.clone(),
            },
            None => ComparatorGroup::ByRoleTitle {
                country: self.country.clone(),
                level: self.level.clone(),
                role_title: self.role_title.clone(),
            },
        }
    }
}
