//! Historical pay decisions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A finalized pay decision of the same type and level as the one being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSimilarDecision {
    /// Base salary before the decision took effect.
    pub pay_before_base: Decimal,
    /// Base salary after the decision took effect.
    pub pay_after_base: Decimal,
    /// The date the decision took effect.
    pub effective_date: NaiveDate,
}
