//! Tax policy models.
//!
//! A regime is described entirely by data: a [`DeductionPolicy`], an ordered
//! [`SlabTable`] and a rebate threshold, bundled as a [`RegimePolicy`]. A
//! [`TaxYearPolicy`] pairs the two regimes with the cess rate for one tax year.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Regime;

/// A marginal bracket: income above `lower_bound` (up to the next bracket)
/// is taxed at `rate_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Lower bound of the bracket (exclusive for every bracket but the first).
    pub lower_bound: Decimal,
    /// Marginal rate in percent.
    pub rate_percent: u32,
}

impl Bracket {
    /// Creates a bracket from a whole-unit lower bound and a rate.
    pub fn new(lower_bound: i64, rate_percent: u32) -> Self {
        Self {
            lower_bound: Decimal::from(lower_bound),
            rate_percent,
        }
    }
}

/// An ordered table of marginal brackets.
///
/// Each bracket's upper bound is the next bracket's lower bound; the last
/// bracket is unbounded. Construction validates that the table starts at zero,
/// that bounds are strictly ascending and that rates do not exceed 100%.
///
/// # Example
///
/// ```
/// use regime_engine::models::{Bracket, SlabTable};
///
/// let table = SlabTable::new(vec![
///     Bracket::new(0, 0),
///     Bracket::new(250_000, 5),
///     Bracket::new(500_000, 20),
/// ])
/// .unwrap();
/// assert_eq!(table.brackets().len(), 3);
///
/// assert!(SlabTable::new(vec![Bracket::new(100, 5)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bracket>", into = "Vec<Bracket>")]
pub struct SlabTable {
    brackets: Vec<Bracket>,
}

impl SlabTable {
    /// Builds a validated slab table.
    pub fn new(brackets: Vec<Bracket>) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidPolicy {
            policy: "slab_table".to_string(),
            message: message.to_string(),
        };

        let first = brackets
            .first()
            .ok_or_else(|| invalid("table must contain at least one bracket"))?;
        if !first.lower_bound.is_zero() {
            return Err(invalid("first bracket must start at zero"));
        }
        if brackets
            .windows(2)
            .any(|pair| pair[1].lower_bound <= pair[0].lower_bound)
        {
            return Err(invalid("bracket bounds must be strictly ascending"));
        }
        if brackets.iter().any(|bracket| bracket.rate_percent > 100) {
            return Err(invalid("bracket rates cannot exceed 100 percent"));
        }

        Ok(Self { brackets })
    }

    /// Builds a table from brackets already known to be valid.
    pub(crate) fn from_validated(brackets: Vec<Bracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets, lowest first.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Returns the upper bound of the bracket at `index`, or `None` for the top bracket.
    pub fn upper_bound(&self, index: usize) -> Option<Decimal> {
        self.brackets.get(index + 1).map(|next| next.lower_bound)
    }
}

impl TryFrom<Vec<Bracket>> for SlabTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<Bracket>) -> Result<Self, Self::Error> {
        SlabTable::new(brackets)
    }
}

impl From<SlabTable> for Vec<Bracket> {
    fn from(table: SlabTable) -> Self {
        table.brackets
    }
}

/// Per-category ceilings for itemized deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionCaps {
    /// Ceiling on section 80C investments plus PF contribution.
    pub section_80c: Decimal,
    /// Ceiling on the 80D premium for self and family.
    pub section_80d_self: Decimal,
    /// Ceiling on the 80D premium for non-senior parents.
    pub section_80d_parents: Decimal,
    /// Ceiling on the 80D premium for senior-citizen parents.
    pub section_80d_parents_senior: Decimal,
    /// Ceiling on home loan interest.
    pub home_loan_interest: Decimal,
}

/// Which deductions a regime allows.
///
/// Professional tax and the standard deduction apply under every regime;
/// itemized deductions apply only when `itemized` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionPolicy {
    /// Flat standard deduction subtracted from gross income.
    pub standard_deduction: Decimal,
    /// Caps on itemized deductions, or `None` when the regime disallows them.
    #[serde(default)]
    pub itemized: Option<DeductionCaps>,
}

/// Everything needed to compute tax under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimePolicy {
    /// The regime this policy describes.
    pub regime: Regime,
    /// Allowed deductions and their caps.
    pub deductions: DeductionPolicy,
    /// Marginal bracket table.
    pub slabs: SlabTable,
    /// Taxable income at or below which the whole tax is rebated.
    pub rebate_threshold: Decimal,
}

/// The complete policy for one tax year.
///
/// # Example
///
/// ```
/// use regime_engine::models::{Regime, TaxYearPolicy};
///
/// let policy = TaxYearPolicy::current();
/// assert_eq!(policy.old_regime.regime, Regime::Old);
/// assert_eq!(policy.new_regime.regime, Regime::New);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearPolicy {
    /// Display label for the tax year (e.g. "FY 2024-25").
    pub label: String,
    /// First day the policy applies.
    pub effective_date: NaiveDate,
    /// Cess rate as a fraction (0.04 for 4%).
    pub cess_rate: Decimal,
    /// Old-regime policy.
    pub old_regime: RegimePolicy,
    /// New-regime policy.
    pub new_regime: RegimePolicy,
}

impl TaxYearPolicy {
    /// Checks the cross-field rules that serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidPolicy {
            policy: self.label.clone(),
            message,
        };

        if self.old_regime.regime != Regime::Old {
            return Err(invalid(format!(
                "old_regime is tagged {}",
                self.old_regime.regime
            )));
        }
        if self.new_regime.regime != Regime::New {
            return Err(invalid(format!(
                "new_regime is tagged {}",
                self.new_regime.regime
            )));
        }
        if self.cess_rate < Decimal::ZERO || self.cess_rate > Decimal::ONE {
            return Err(invalid(format!(
                "cess_rate {} must be between 0 and 1",
                self.cess_rate
            )));
        }

        for policy in [&self.old_regime, &self.new_regime] {
            let deductions = &policy.deductions;
            let mut amounts = vec![deductions.standard_deduction, policy.rebate_threshold];
            if let Some(caps) = &deductions.itemized {
                amounts.extend([
                    caps.section_80c,
                    caps.section_80d_self,
                    caps.section_80d_parents,
                    caps.section_80d_parents_senior,
                    caps.home_loan_interest,
                ]);
            }
            if amounts.iter().any(|amount| amount.is_sign_negative()) {
                return Err(invalid(format!(
                    "{} regime amounts cannot be negative",
                    policy.regime
                )));
            }
        }

        Ok(())
    }

    /// Returns the policy for the requested regime.
    pub fn regime(&self, regime: Regime) -> &RegimePolicy {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }
}
