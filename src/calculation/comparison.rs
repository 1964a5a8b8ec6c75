//! Regime comparison.
//!
//! Runs the deduction, slab and rebate/cess stages once per regime against the
//! same input and picks the cheaper regime.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ComparisonResult, Regime, RegimePolicy, TaxInput, TaxResult, TaxYearPolicy};

use super::deductions::normalize_income;
use super::rebate_cess::apply_rebate_and_cess;
use super::slabs::calculate_slab_tax;

/// Computes the liability under a single regime.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::calculate_regime;
/// use regime_engine::models::{TaxInput, TaxYearPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = TaxYearPolicy::current();
/// let input = TaxInput {
///     salary: Decimal::from(400_000),
///     ..Default::default()
/// };
///
/// let result = calculate_regime(&input, &policy.old_regime, policy.cess_rate);
/// assert_eq!(result.taxable_income, Decimal::from(350_000));
/// assert_eq!(result.total_tax, Decimal::ZERO);
/// ```
pub fn calculate_regime(input: &TaxInput, policy: &RegimePolicy, cess_rate: Decimal) -> TaxResult {
    let deductions = normalize_income(input, &policy.deductions);
    let slabs = calculate_slab_tax(deductions.taxable_income, &policy.slabs);
    let outcome = apply_rebate_and_cess(
        deductions.taxable_income,
        slabs.tax_before_rebate,
        policy.rebate_threshold,
        cess_rate,
    );

    debug!(
        regime = %policy.regime,
        taxable_income = %deductions.taxable_income,
        tax_before_rebate = %slabs.tax_before_rebate,
        rebate = %outcome.rebate_applied,
        total_tax = %outcome.total_tax,
        "Calculated regime liability"
    );

    TaxResult {
        regime: policy.regime,
        gross_income: deductions.gross_income,
        total_deductions: deductions.total_deductions,
        taxable_income: deductions.taxable_income,
        tax_before_rebate: slabs.tax_before_rebate,
        rebate_applied: outcome.rebate_applied,
        tax_after_rebate: outcome.tax_after_rebate,
        cess: outcome.cess,
        total_tax: outcome.total_tax,
        slab_breakdown: slabs.breakdown,
    }
}

/// Pairs two regime results and picks the cheaper one.
///
/// `savings` is the absolute difference of the totals. Ties go to
/// [`Regime::Old`].
pub fn compare_results(old_regime: TaxResult, new_regime: TaxResult) -> ComparisonResult {
    let savings = (old_regime.total_tax - new_regime.total_tax).abs();
    let suggested_regime = if old_regime.total_tax <= new_regime.total_tax {
        Regime::Old
    } else {
        Regime::New
    };

    ComparisonResult {
        old_regime,
        new_regime,
        suggested_regime,
        savings,
    }
}

/// Compares both regimes under an explicit tax-year policy.
pub fn calculate_tax_with_policy(input: &TaxInput, policy: &TaxYearPolicy) -> ComparisonResult {
    let old_regime = calculate_regime(input, &policy.old_regime, policy.cess_rate);
    let new_regime = calculate_regime(input, &policy.new_regime, policy.cess_rate);
    let comparison = compare_results(old_regime, new_regime);

    debug!(
        policy = %policy.label,
        suggested = %comparison.suggested_regime,
        savings = %comparison.savings,
        "Compared regimes"
    );

    comparison
}

/// Compares both regimes under the current compiled-in policy.
///
/// This never fails: negative amounts are clamped to zero and every input
/// produces a result.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::calculate_tax;
/// use regime_engine::models::{Regime, TaxInput};
/// use rust_decimal::Decimal;
///
/// let input = TaxInput {
///     salary: Decimal::from(1_500_000),
///     section_80c: Decimal::from(150_000),
///     section_80d_self: Decimal::from(25_000),
///     section_80d_parents: Decimal::from(25_000),
///     ..Default::default()
/// };
///
/// let comparison = calculate_tax(&input);
/// assert_eq!(comparison.old_regime.total_tax, Decimal::from(195_000));
/// assert_eq!(comparison.new_regime.taxable_income, Decimal::from(1_425_000));
/// assert_eq!(comparison.suggested_regime, Regime::New);
/// ```
pub fn calculate_tax(input: &TaxInput) -> ComparisonResult {
    calculate_tax_with_policy(input, &TaxYearPolicy::current())
}
