//! Rebate and cess application.

use rust_decimal::Decimal;

/// Tax figures after the rebate and cess have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebateCessOutcome {
    /// Amount of tax forgiven by the rebate.
    pub rebate_applied: Decimal,
    /// Tax remaining after the rebate.
    pub tax_after_rebate: Decimal,
    /// Cess charged on the tax after rebate.
    pub cess: Decimal,
    /// Tax after rebate plus cess.
    pub total_tax: Decimal,
}

/// Applies the full rebate and then the cess.
///
/// The rebate is a cliff: when taxable income is at or below
/// `rebate_threshold` the entire slab tax is forgiven, and one unit above the
/// threshold the full tax is due. There is no marginal phase-out.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::apply_rebate_and_cess;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cess_rate = Decimal::from_str("0.04").unwrap();
/// let threshold = Decimal::from(500_000);
///
/// let at_threshold =
///     apply_rebate_and_cess(Decimal::from(500_000), Decimal::from(12_500), threshold, cess_rate);
/// assert_eq!(at_threshold.total_tax, Decimal::ZERO);
///
/// let above = apply_rebate_and_cess(
///     Decimal::from(500_001),
///     Decimal::from_str("12500.20").unwrap(),
///     threshold,
///     cess_rate,
/// );
/// assert_eq!(above.total_tax, Decimal::from_str("13000.208").unwrap());
/// ```
pub fn apply_rebate_and_cess(
    taxable_income: Decimal,
    tax_before_rebate: Decimal,
    rebate_threshold: Decimal,
    cess_rate: Decimal,
) -> RebateCessOutcome {
    let rebate_applied = if taxable_income <= rebate_threshold {
        tax_before_rebate
    } else {
        Decimal::ZERO
    };

    let tax_after_rebate = tax_before_rebate - rebate_applied;
    let cess = tax_after_rebate.saturating_mul(cess_rate);

    RebateCessOutcome {
        rebate_applied,
        tax_after_rebate,
        cess,
        total_tax: tax_after_rebate.saturating_add(cess),
    }
}
