//! Salary range (pay band) model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A configured salary band for a role.
///
/// `min < mid < max` is enforced when the range is created and is not
/// re-validated during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound of the band.
    pub min: Decimal,
    /// Midpoint of the band.
    pub mid: Decimal,
    /// Upper bound of the band.
    pub max: Decimal,
    /// ISO 4217 currency code of the band.
    pub currency: String,
}

impl SalaryRange {
    /// Returns where `value` sits in the band, where 0 is `min` and 1 is `max`.
    ///
    /// A degenerate band (`max == min`) reports the midpoint, 0.5. Returns
    /// `None` when the position does not fit in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_policy_engine::models::SalaryRange;
    /// use rust_decimal::Decimal;
    ///
    /// let range = SalaryRange {
    ///     min: Decimal::new(80000, 0),
    ///     mid: Decimal::new(100000, 0),
    ///     max: Decimal::new(120000, 0),
    ///     currency: "EUR".to_string(),
    /// };
    /// assert_eq!(range.position_of(Decimal::new(90000, 0)), Some(Decimal::new(25, 2)));
    /// ```
    pub fn position_of(&self, value: Decimal) -> Option<Decimal> {
        let width = self.max.checked_sub(self.min)?;
        if width.is_zero() {
            return Some(Decimal::new(5, 1));
        }
        value.checked_sub(self.min)?.checked_div(width)
    }
}
