//! Salary slip model.
//!
//! A [`SalarySlip`] is the record a document-extraction service hands to the
//! engine after reading an uploaded payslip. Only the numeric figures are
//! modelled here; file handling and text extraction live outside the crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_input::non_negative;

const MONTHS_PER_YEAR: u32 = 12;

/// Figures extracted from a salary slip.
///
/// Amounts are annual unless the slip was read month-by-month, in which case
/// [`SalarySlip::annualized`] scales it up.
///
/// # Example
///
/// ```
/// use regime_engine::models::SalarySlip;
/// use rust_decimal::Decimal;
///
/// let monthly = SalarySlip {
///     salary: Decimal::from(41_800),
///     pf_contribution: Some(Decimal::from(1_800)),
///     ..Default::default()
/// };
/// let annual = monthly.annualized();
/// assert_eq!(annual.salary, Decimal::from(501_600));
/// assert_eq!(annual.pf_contribution, Some(Decimal::from(21_600)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalarySlip {
    /// Gross salary. Zero when the slip only lists components.
    pub salary: Decimal,
    /// Tax deducted at source by the employer.
    pub tds: Decimal,
    /// Basic salary component.
    pub basic_salary: Option<Decimal>,
    /// House rent allowance.
    pub hra: Option<Decimal>,
    /// Special allowance.
    pub special_allowance: Option<Decimal>,
    /// Bonus.
    pub bonus: Option<Decimal>,
    /// Gratuity.
    pub gratuity: Option<Decimal>,
    /// Leave encashment.
    pub leave_encashment: Option<Decimal>,
    /// Professional tax withheld, if printed on the slip.
    pub professional_tax: Option<Decimal>,
    /// Provident fund contribution withheld, if printed on the slip.
    pub pf_contribution: Option<Decimal>,
}

impl SalarySlip {
    /// Returns the sum of the itemized earning components present on the slip.
    pub fn components_total(&self) -> Decimal {
        [
            self.basic_salary,
            self.hra,
            self.special_allowance,
            self.bonus,
            self.gratuity,
            self.leave_encashment,
        ]
        .into_iter()
        .flatten()
        .map(non_negative)
        .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Returns the salary to use for tax purposes.
    ///
    /// The printed gross salary wins; when it is missing (zero) the itemized
    /// components are summed instead.
    pub fn effective_salary(&self) -> Decimal {
        let salary = non_negative(self.salary);
        if salary.is_zero() {
            self.components_total()
        } else {
            salary
        }
    }

    /// Treats this slip as a single month and scales every figure to a year.
    pub fn annualized(&self) -> SalarySlip {
        let months = Decimal::from(MONTHS_PER_YEAR);
        let scale = |amount: Option<Decimal>| amount.map(|value| value.saturating_mul(months));

        SalarySlip {
            salary: self.salary.saturating_mul(months),
            tds: self.tds.saturating_mul(months),
            basic_salary: scale(self.basic_salary),
            hra: scale(self.hra),
            special_allowance: scale(self.special_allowance),
            bonus: scale(self.bonus),
            gratuity: scale(self.gratuity),
            leave_encashment: scale(self.leave_encashment),
            professional_tax: scale(self.professional_tax),
            pf_contribution: scale(self.pf_contribution),
        }
    }
}
