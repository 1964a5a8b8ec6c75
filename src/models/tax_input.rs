//! Tax input model and related types.
//!
//! This module defines the [`TaxInput`] record consumed by the engine and the
//! [`EmploymentType`] enum describing how the income was earned.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalarySlip;

/// Represents how the taxpayer earns their income.
///
/// Employment type is carried through for the caller's benefit; it does not
/// change any part of the tax formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Salaried employee.
    #[default]
    Salaried,
    /// Business or professional income.
    Business,
}

/// The annual income and deduction figures for one calculation request.
///
/// All amounts are annual and expressed in the same currency unit. Missing
/// fields deserialize as zero, and negative amounts are floored to zero by
/// the engine rather than rejected.
///
/// # Example
///
/// ```
/// use regime_engine::models::TaxInput;
/// use rust_decimal::Decimal;
///
/// let input = TaxInput {
///     salary: Decimal::from(1_500_000),
///     section_80c: Decimal::from(150_000),
///     ..Default::default()
/// };
/// assert_eq!(input.gross_income(), Decimal::from(1_500_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxInput {
    /// Annual salary income.
    pub salary: Decimal,
    /// Income from all other sources (interest, rent, etc.).
    pub other_income: Decimal,
    /// Section 80C investments (PPF, ELSS, life insurance, ...).
    pub section_80c: Decimal,
    /// Section 80D health insurance premium for self and family.
    pub section_80d_self: Decimal,
    /// Section 80D health insurance premium paid for parents.
    pub section_80d_parents: Decimal,
    /// Whether the insured parents are senior citizens (widens the 80D cap).
    pub parents_senior: bool,
    /// Interest paid on a home loan for a self-occupied property.
    pub home_loan_interest: Decimal,
    /// Professional tax paid to the state.
    pub professional_tax: Decimal,
    /// Employee provident fund contribution (counts toward the 80C cap).
    pub pf_contribution: Decimal,
    /// How the income was earned.
    pub employment_type: EmploymentType,
}

impl TaxInput {
    /// Returns salary plus other income, after flooring both at zero.
    ///
    /// Saturates at [`Decimal::MAX`].
    pub fn gross_income(&self) -> Decimal {
        non_negative(self.salary).saturating_add(non_negative(self.other_income))
    }

    /// Returns a copy of this input with every amount floored at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use regime_engine::models::TaxInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = TaxInput {
    ///     salary: Decimal::from(600_000),
    ///     home_loan_interest: Decimal::from(-10_000),
    ///     ..Default::default()
    /// };
    /// let clamped = input.clamped();
    /// assert_eq!(clamped.home_loan_interest, Decimal::ZERO);
    /// assert_eq!(clamped.salary, Decimal::from(600_000));
    /// ```
    pub fn clamped(&self) -> TaxInput {
        TaxInput {
            salary: non_negative(self.salary),
            other_income: non_negative(self.other_income),
            section_80c: non_negative(self.section_80c),
            section_80d_self: non_negative(self.section_80d_self),
            section_80d_parents: non_negative(self.section_80d_parents),
            parents_senior: self.parents_senior,
            home_loan_interest: non_negative(self.home_loan_interest),
            professional_tax: non_negative(self.professional_tax),
            pf_contribution: non_negative(self.pf_contribution),
            employment_type: self.employment_type,
        }
    }

    /// Returns a new input with the figures extracted from a salary slip folded in.
    ///
    /// The slip's salary replaces [`TaxInput::salary`]. Professional tax and PF
    /// contribution are replaced only when the slip carries them; every other
    /// field is kept as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use regime_engine::models::{SalarySlip, TaxInput};
    /// use rust_decimal::Decimal;
    ///
    /// let input = TaxInput {
    ///     section_80c: Decimal::from(50_000),
    ///     ..Default::default()
    /// };
    /// let slip = SalarySlip {
    ///     salary: Decimal::from(501_600),
    ///     professional_tax: Some(Decimal::from(2_496)),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = input.apply_salary_slip(&slip);
    /// assert_eq!(merged.salary, Decimal::from(501_600));
    /// assert_eq!(merged.professional_tax, Decimal::from(2_496));
    /// assert_eq!(merged.section_80c, Decimal::from(50_000));
    /// ```
    pub fn apply_salary_slip(&self, slip: &SalarySlip) -> TaxInput {
        TaxInput {
            salary: slip.effective_salary(),
            professional_tax: slip.professional_tax.unwrap_or(self.professional_tax),
            pf_contribution: slip.pf_contribution.unwrap_or(self.pf_contribution),
            ..self.clone()
        }
    }
}

/// Floors an amount at zero.
pub(crate) fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}
