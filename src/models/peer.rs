//! Comparator group peers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The key identifying an employee's comparator group.
///
/// Roles without a job family taxonomy fall back to matching on role title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparatorGroup {
    /// Peers sharing country, job family and level.
    ByJobFamily {
        /// Country code.
        country: String,
        /// Job family.
        job_family: String,
        /// Level.
        level: String,
    },
    /// Peers sharing country, level and role title.
    ByRoleTitle {
        /// Country code.
        country: String,
        /// Level.
        level: String,
        /// Role title.
        role_title: String,
    },
}

/// An anonymized member of a comparator group.
///
/// Peers carry no identity; they are only used for aggregate statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorPeer {
    /// The peer's current base salary.
    pub base_salary: Decimal,
    /// The peer's free-text gender, if recorded.
    #[serde(default)]
    pub gender: Option<String>,
}

impl ComparatorPeer {
    /// Creates a peer from a salary and an optional gender label.
    pub fn new(base_salary: Decimal, gender: Option<&str>) -> Self {
        Self {
            base_salary,
            gender: gender.map(str::to_string),
        }
    }
}
