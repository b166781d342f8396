//! Small statistics helpers shared by the checks.

use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the median of `values`, or `None` if empty.
///
/// Even-length inputs take the point halfway between the two middle values.
///
/// # Examples
///
/// ```
/// use pay_policy_engine::checks::median;
/// use rust_decimal::Decimal;
///
/// let odd = [10, 20, 30].map(Decimal::from);
/// let even = [10, 20, 30, 40].map(Decimal::from);
/// assert_eq!(median(&odd), Some(Decimal::from(20)));
/// assert_eq!(median(&even), Some(Decimal::from(25)));
/// ```
pub fn median(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let (low, high) = (sorted[mid - 1], sorted[mid]);
        let midpoint = match high.checked_sub(low) {
            Some(spread) => low + spread / Decimal::TWO,
            None => low / Decimal::TWO + high / Decimal::TWO,
        };
        Some(midpoint)
    } else {
        Some(sorted[mid])
    }
}

/// Returns the arithmetic mean of `values`, or `None` if empty or if the sum
/// overflows.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))?;
    sum.checked_div(Decimal::from(values.len()))
}

/// Returns `(value - base) / base * 100`.
///
/// `None` when `base` is zero or the result does not fit in a `Decimal`.
pub fn percent_change(value: Decimal, base: Decimal) -> Option<Decimal> {
    if base.is_zero() {
        return None;
    }
    value
        .checked_sub(base)?
        .checked_div(base)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Rounds a percentage to one decimal place for reporting.
pub fn round_pct(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
