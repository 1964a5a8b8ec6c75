//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! policies from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::calculation::calculate_tax_with_policy;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComparisonResult, TaxInput, TaxYearPolicy};

use super::types::{PolicyConfig, ScheduleMetadata};

/// Loads and provides access to tax-year policies.
///
/// # Directory Structure
///
/// ```text
/// config/income_tax/
/// ├── schedule.yaml        # Schedule metadata
/// └── policies/
///     ├── 2023-04-01.yaml  # FY 2023-24
///     └── 2024-04-01.yaml  # FY 2024-25
/// ```
///
/// # Example
///
/// ```no_run
/// use regime_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/income_tax")?;
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let policy = loader.policy_for(date)?;
/// println!("Using {}", policy.label);
/// # Ok::<(), regime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `schedule.yaml` or the `policies` directory is missing
    /// - any file contains invalid YAML or an invalid slab table
    /// - any policy fails [`TaxYearPolicy::validate`]
    /// - two policies share an effective date
    /// - no policy files are present
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let policies = Self::load_policies(&path.join("policies"))?;

        info!(
            schedule = %metadata.code,
            policies = policies.len(),
            "Loaded tax-year policies"
        );

        Ok(Self {
            config: PolicyConfig::new(metadata, policies),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates every policy file in the policies directory.
    fn load_policies(policies_dir: &Path) -> EngineResult<Vec<TaxYearPolicy>> {
        let dir_str = policies_dir.display().to_string();

        let entries = fs::read_dir(policies_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut policies: Vec<TaxYearPolicy> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                debug!(path = %path.display(), "Skipping non-YAML file");
                continue;
            }

            let policy = Self::load_yaml::<TaxYearPolicy>(&path)?;
            policy.validate()?;

            if let Some(existing) = policies
                .iter()
                .find(|loaded| loaded.effective_date == policy.effective_date)
            {
                return Err(EngineError::InvalidPolicy {
                    policy: policy.label,
                    message: format!(
                        "effective date {} is already used by '{}' ({})",
                        existing.effective_date,
                        existing.label,
                        path.display()
                    ),
                });
            }

            debug!(path = %path.display(), policy = %policy.label, "Loaded policy");
            policies.push(policy);
        }

        if policies.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no policy files found)", dir_str),
            });
        }

        Ok(policies)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        self.config.schedule()
    }

    /// Gets the policy in force on a given date.
    ///
    /// Returns `PolicyNotFound` when the date precedes every loaded policy.
    pub fn policy_for(&self, date: NaiveDate) -> EngineResult<&TaxYearPolicy> {
        self.config
            .policy_for(date)
            .ok_or(EngineError::PolicyNotFound { date })
    }

    /// Returns the newest loaded policy.
    pub fn latest_policy(&self) -> Option<&TaxYearPolicy> {
        self.config.policies().last()
    }

    /// Compares both regimes using the policy in force on `date`.
    pub fn calculate(&self, input: &TaxInput, date: NaiveDate) -> EngineResult<ComparisonResult> {
        let policy = self.policy_for(date)?;
        Ok(calculate_tax_with_policy(input, policy))
    }
}
