//! Policy rule catalog loading.
//!
//! This module provides the [`RuleCatalog`] type for loading policy rules from
//! YAML files, the format administrators export rule sets in.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::PolicyRule;

/// On-disk layout of a rule catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    rules: Vec<PolicyRule>,
}

/// A set of policy rules loaded from YAML.
///
/// # File Format
///
/// ```yaml
/// rules:
///   - id: 3f1e2d4c-0000-4000-8000-000000000001
///     name: Salary band compliance
///     checkType: SALARY_RANGE_COMPLIANCE
///     severity: BLOCK
///     params:
///       allowBelowMin: true
///     appliesToCountries: [DE, AT]
/// ```
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<PolicyRule>,
}

impl RuleCatalog {
    /// Loads a catalog from the YAML file at `path`.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not a valid catalog.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a catalog from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_policy_engine::config::RuleCatalog;
    ///
    /// let yaml = r#"
    /// rules:
    ///   - id: 3f1e2d4c-0000-4000-8000-000000000001
    ///     checkType: CHANGE_MAGNITUDE
    ///     severity: WARNING
    /// "#;
    ///
    /// let catalog = RuleCatalog::from_yaml_str(yaml).unwrap();
    /// assert_eq!(catalog.rules().len(), 1);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { rules: file.rules })
    }

    /// Returns all rules in the catalog, enabled or not.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Returns only the enabled rules.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &PolicyRule> {
        self.rules.iter().filter(|r| r.enabled)
    }

    /// Consumes the catalog, returning its rules.
    pub fn into_rules(self) -> Vec<PolicyRule> {
        self.rules
    }
}
