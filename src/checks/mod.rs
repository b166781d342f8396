//! Policy checks for the pay policy engine.
//!
//! Each check is a pure function of the shared evaluation context, the
//! proposed salary, its typed parameters and the rule's severity. Checks never
//! fail on missing or sparse data; they pass with an explanation instead. The
//! registry maps rule check-type identifiers to these functions.

mod change_magnitude;
mod gender;
mod gender_gap;
mod historical_consistency;
mod median_deviation;
mod registry;
mod salary_range;
mod statistics;
mod thresholds;

pub use change_magnitude::check_change_magnitude;
pub use gender::Gender;
pub use gender_gap::{
    GapMetric, GenderGap, MIN_GROUP_SIZE_FOR_MEDIAN, check_gender_gap, gender_gap,
};
pub use historical_consistency::check_historical_consistency;
pub use median_deviation::{MIN_PEERS_FOR_MEDIAN, check_median_deviation};
pub use registry::{CheckType, dispatch};
pub use salary_range::check_salary_range;
pub use statistics::{mean, median, percent_change, round_pct};
pub use thresholds::grade;
