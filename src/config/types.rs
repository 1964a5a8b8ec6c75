//! Configuration types for tax-year policy tables.
//!
//! This module contains the structures deserialized from the YAML files of a
//! policy directory. The policy records themselves live in
//! [`crate::models`] so that compiled-in and loaded policies share one type.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::TaxYearPolicy;

/// Metadata about the tax schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "IN-ITA-115BAC").
    pub code: String,
    /// Human-readable name of the schedule.
    pub name: String,
    /// URL to the official source for the rates.
    pub source_url: String,
}

/// The complete set of policies loaded from a configuration directory.
///
/// Policies are kept sorted by effective date, oldest first.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: ScheduleMetadata,
    policies: Vec<TaxYearPolicy>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig, sorting the policies by effective date.
    pub fn new(metadata: ScheduleMetadata, policies: Vec<TaxYearPolicy>) -> Self {
        let mut sorted = policies;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            policies: sorted,
        }
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all policies, oldest first.
    pub fn policies(&self) -> &[TaxYearPolicy] {
        &self.policies
    }

    /// Returns the most recent policy effective on or before `date`.
    pub fn policy_for(&self, date: NaiveDate) -> Option<&TaxYearPolicy> {
        self.policies
            .iter()
            .rfind(|policy| policy.effective_date <= date)
    }
}
