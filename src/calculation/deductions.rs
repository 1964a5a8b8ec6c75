//! Deduction normalization.
//!
//! Applies a regime's [`DeductionPolicy`] to a [`TaxInput`] and produces the
//! net taxable income. Caps truncate silently; nothing is ever rejected.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{DeductionCaps, DeductionPolicy, TaxInput};

/// The result of applying a deduction policy to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionOutcome {
    /// Salary plus other income.
    pub gross_income: Decimal,
    /// Total deductions subtracted after caps.
    pub total_deductions: Decimal,
    /// `max(0, gross_income - total_deductions)`.
    pub taxable_income: Decimal,
}

/// Computes taxable income under a deduction policy.
///
/// Every input amount is floored at zero first. Professional tax and the
/// standard deduction always apply. When the policy carries itemized caps,
/// the following are also subtracted:
///
/// * `min(section_80c + pf_contribution, cap_80c)`
/// * `min(section_80d_self, cap_80d_self)`
/// * `min(section_80d_parents, senior or non-senior parents cap)`
/// * `min(home_loan_interest, cap_home_loan)`
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::normalize_income;
/// use regime_engine::models::{TaxInput, TaxYearPolicy};
/// use rust_decimal::Decimal;
///
/// let input = TaxInput {
///     salary: Decimal::from(1_000_000),
///     section_80c: Decimal::from(500_000),
///     ..Default::default()
/// };
/// let policy = TaxYearPolicy::current();
///
/// let outcome = normalize_income(&input, &policy.old_regime.deductions);
/// // 1,000,000 - 50,000 standard - 150,000 capped 80C
/// assert_eq!(outcome.taxable_income, Decimal::from(800_000));
/// ```
pub fn normalize_income(input: &TaxInput, policy: &DeductionPolicy) -> DeductionOutcome {
    let input = input.clamped();
    let gross_income = input.gross_income();

    let itemized = policy
        .itemized
        .as_ref()
        .map_or(Decimal::ZERO, |caps| itemized_deductions(&input, caps));

    let total_deductions = input
        .professional_tax
        .saturating_add(policy.standard_deduction)
        .saturating_add(itemized);
    let taxable_income = (gross_income - total_deductions).max(Decimal::ZERO);

    trace!(
        gross_income = %gross_income,
        itemized = %itemized,
        total_deductions = %total_deductions,
        taxable_income = %taxable_income,
        "Normalized income"
    );

    DeductionOutcome {
        gross_income,
        total_deductions,
        taxable_income,
    }
}

fn itemized_deductions(input: &TaxInput, caps: &DeductionCaps) -> Decimal {
    let parents_cap = if input.parents_senior {
        caps.section_80d_parents_senior
    } else {
        caps.section_80d_parents
    };

    [
        input.section_80c.saturating_add(input.pf_contribution).min(caps.section_80c),
        input.section_80d_self.min(caps.section_80d_self),
        input.section_80d_parents.min(parents_cap),
        input.home_loan_interest.min(caps.home_loan_interest),
    ]
    .into_iter()
    .fold(Decimal::ZERO, Decimal::saturating_add)
}
