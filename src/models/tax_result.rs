//! Tax result models for the regime engine.
//!
//! This module contains the per-regime [`TaxResult`], the [`ComparisonResult`]
//! that pairs the two regimes, and the [`Settlement`] against tax already
//! deducted at source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two alternative statutory tax regimes.
///
/// # Example
///
/// ```
/// use regime_engine::models::Regime;
///
/// assert_eq!(Regime::Old.to_string(), "OLD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    /// The old regime: lower standard deduction, itemized deductions allowed.
    Old,
    /// The new regime: larger standard deduction, no itemized deductions.
    New,
}

impl Regime {
    /// Returns the wire name of the regime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Old => "OLD",
            Regime::New => "NEW",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tax attributed to a single marginal bracket.
///
/// # Example
///
/// ```
/// use regime_engine::models::SlabDetail;
/// use rust_decimal::Decimal;
///
/// let slab = SlabDetail {
///     slab_label: "2.5L - 5L".to_string(),
///     rate_percent: 5,
///     tax_amount: Decimal::from(12_500),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabDetail {
    /// Human-readable bracket range in lakh notation (e.g. "5L - 10L").
    pub slab_label: String,
    /// The marginal rate of the bracket, in percent.
    pub rate_percent: u32,
    /// Tax charged on the slice of income falling inside the bracket.
    pub tax_amount: Decimal,
}

/// The computed liability under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    /// The regime this result was computed under.
    pub regime: Regime,
    /// Salary plus other income, before deductions.
    pub gross_income: Decimal,
    /// Deductions actually subtracted, after caps.
    pub total_deductions: Decimal,
    /// Income left to tax after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Slab tax before any rebate.
    pub tax_before_rebate: Decimal,
    /// Rebate granted at or below the regime's threshold.
    pub rebate_applied: Decimal,
    /// Slab tax minus the rebate.
    pub tax_after_rebate: Decimal,
    /// Health and education cess on the tax after rebate.
    pub cess: Decimal,
    /// Final liability: tax after rebate plus cess.
    pub total_tax: Decimal,
    /// Per-bracket tax, ordered from the lowest bracket to the highest touched.
    pub slab_breakdown: Vec<SlabDetail>,
}

/// Both regimes evaluated against the same input, plus the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// The old-regime result.
    pub old_regime: TaxResult,
    /// The new-regime result.
    pub new_regime: TaxResult,
    /// The cheaper regime. Ties favour [`Regime::Old`].
    pub suggested_regime: Regime,
    /// Absolute difference between the two total liabilities.
    pub savings: Decimal,
}

impl ComparisonResult {
    /// Returns the result for the requested regime.
    pub fn result_for(&self, regime: Regime) -> &TaxResult {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }

    /// Returns the result for the suggested regime.
    pub fn suggested(&self) -> &TaxResult {
        self.result_for(self.suggested_regime)
    }
}

/// Outcome of reconciling tax deducted at source against the final liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum Settlement {
    /// More tax was withheld than is owed; the difference is refundable.
    Refund(Decimal),
    /// Less tax was withheld than is owed; the difference is still payable.
    Payable(Decimal),
    /// Withholding matches the liability exactly.
    Settled,
}
