//! Configuration for the pay policy engine.
//!
//! This module provides the typed parameter sets for each check (decoded from a
//! rule's free-form `params` map) and a loader for YAML policy rule catalogs.
//!
//! # Example
//!
//! ```no_run
//! use pay_policy_engine::config::RuleCatalog;
//!
//! let catalog = RuleCatalog::load("./config/policies/default.yaml").unwrap();
//! println!("Loaded {} rules", catalog.rules().len());
//! ```

mod loader;
mod types;

pub use loader::RuleCatalog;
pub use types::{
    ChangeMagnitudeParams, GenderGapParams, HistoricalConsistencyParams, MedianDeviationParams,
    SalaryRangeParams, decode_params,
};
