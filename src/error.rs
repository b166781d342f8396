//! Error types for the pay policy engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can fail an evaluation. Missing or sparse data is
//! deliberately *not* an error: checks report it as a passing result.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the pay policy engine.
///
/// # Example
///
/// ```
/// use pay_policy_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee does not exist or does not belong to the organization.
    #[error("Employee {employee_id} not found in organization {organization_id}")]
    EmployeeNotFound {
        /// The employee that was requested.
        employee_id: Uuid,
        /// The organization the employee was expected in.
        organization_id: Uuid,
    },

    /// A rule carried parameters of the wrong shape for its check.
    #[error("Invalid parameters for rule {rule_id} ({check_type}): {message}")]
    InvalidRuleParams {
        /// The offending rule.
        rule_id: Uuid,
        /// The check type the rule references.
        check_type: String,
        /// A description of the problem.
        message: String,
    },

    /// The data-access collaborator failed. The message is passed through as-is.
    #[error("Data access failed: {message}")]
    DataAccess {
        /// The collaborator's error message.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Wraps an upstream failure from a data-access implementation.
    pub fn data_access(message: impl Into<String>) -> Self {
        EngineError::DataAccess {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
