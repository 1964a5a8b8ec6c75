//! Settlement of withheld tax against the recommended regime.

use rust_decimal::Decimal;

use crate::models::{ComparisonResult, Settlement};

/// Reconciles tax deducted at source against the suggested regime's total.
///
/// Negative withholding is treated as zero.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::{calculate_tax, settle};
/// use regime_engine::models::{Settlement, TaxInput};
/// use rust_decimal::Decimal;
///
/// let comparison = calculate_tax(&TaxInput {
///     salary: Decimal::from(400_000),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     settle(&comparison, Decimal::from(3_000)),
///     Settlement::Refund(Decimal::from(3_000))
/// );
/// ```
pub fn settle(comparison: &ComparisonResult, tds: Decimal) -> Settlement {
    let withheld = tds.max(Decimal::ZERO);
    let owed = comparison.suggested().total_tax;

    if withheld > owed {
        Settlement::Refund(withheld - owed)
    } else if withheld < owed {
        Settlement::Payable(owed - withheld)
    } else {
        Settlement::Settled
    }
}
