//! Slab (marginal bracket) tax calculation.
//!
//! A single walker handles every regime: it is driven by a [`SlabTable`]
//! rather than by per-regime thresholds.

use rust_decimal::Decimal;

use crate::models::{SlabDetail, SlabTable};

const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// The result of applying a slab table to taxable income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabCalculation {
    /// Sum of the tax across all touched brackets.
    pub tax_before_rebate: Decimal,
    /// One row per touched bracket, lowest first.
    pub breakdown: Vec<SlabDetail>,
}

/// Applies a marginal slab table to taxable income.
///
/// A bracket is touched when the income exceeds its lower bound; the lowest
/// bracket is always touched, so even zero income yields one zero-tax row.
/// Each touched bracket taxes only the slice of income that falls inside it,
/// `min(income, upper) - lower`, at its own rate. Brackets above the income
/// are left out of the breakdown.
///
/// Negative income is treated as zero.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::calculate_slab_tax;
/// use regime_engine::models::TaxYearPolicy;
/// use rust_decimal::Decimal;
///
/// let table = &TaxYearPolicy::current().old_regime.slabs;
/// let result = calculate_slab_tax(Decimal::from(1_250_000), table);
///
/// // 12,500 (5%) + 100,000 (20%) + 75,000 (30%)
/// assert_eq!(result.tax_before_rebate, Decimal::from(187_500));
/// assert_eq!(result.breakdown.len(), 4);
/// assert_eq!(result.breakdown[0].slab_label, "0 - 2.5L");
/// assert_eq!(result.breakdown[3].slab_label, "Above 10L");
/// ```
pub fn calculate_slab_tax(taxable_income: Decimal, table: &SlabTable) -> SlabCalculation {
    let income = taxable_income.max(Decimal::ZERO);
    let mut breakdown = Vec::with_capacity(table.brackets().len());

    for (index, bracket) in table.brackets().iter().enumerate() {
        if index > 0 && income <= bracket.lower_bound {
            break;
        }

        let upper = table.upper_bound(index);
        let ceiling = upper.map_or(income, |upper| income.min(upper));
        let width = (ceiling - bracket.lower_bound).max(Decimal::ZERO);
        let tax_amount = bracket_tax(width, bracket.rate_percent);

        breakdown.push(SlabDetail {
            slab_label: slab_label(bracket.lower_bound, upper),
            rate_percent: bracket.rate_percent,
            tax_amount,
        });
    }

    let tax_before_rebate = breakdown
        .iter()
        .map(|slab| slab.tax_amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    SlabCalculation {
        tax_before_rebate,
        breakdown,
    }
}

/// Taxes `width` at `rate_percent`.
///
/// Widths too large to multiply by the rate first are scaled down by 100
/// before the multiply instead.
fn bracket_tax(width: Decimal, rate_percent: u32) -> Decimal {
    let rate = Decimal::from(rate_percent);
    width.checked_mul(rate).map_or_else(
        || (width / Decimal::ONE_HUNDRED).saturating_mul(rate),
        |product| product / Decimal::ONE_HUNDRED,
    )
}

/// Builds the display label for a bracket in lakh notation.
///
/// # Examples
///
/// ```
/// use regime_engine::calculation::slab_label;
/// use rust_decimal::Decimal;
///
/// assert_eq!(slab_label(Decimal::ZERO, Some(Decimal::from(300_000))), "0 - 3L");
/// assert_eq!(
///     slab_label(Decimal::from(250_000), Some(Decimal::from(500_000))),
///     "2.5L - 5L"
/// );
/// assert_eq!(slab_label(Decimal::from(1_500_000), None), "Above 15L");
/// ```
pub fn slab_label(lower: Decimal, upper: Option<Decimal>) -> String {
    match upper {
        Some(upper) if lower.is_zero() => format!("0 - {}", in_lakh(upper)),
        Some(upper) => format!("{} - {}", in_lakh(lower), in_lakh(upper)),
        None if lower.is_zero() => "All income".to_string(),
        None => format!("Above {}", in_lakh(lower)),
    }
}

fn in_lakh(amount: Decimal) -> String {
    format!("{}L", (amount / LAKH).normalize())
}
