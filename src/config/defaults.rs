//! Compiled-in tax-year policies.
//!
//! These mirror the YAML tables shipped under `config/income_tax/policies` so
//! the engine can run without touching the filesystem.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Bracket, DeductionCaps, DeductionPolicy, Regime, RegimePolicy, SlabTable, TaxYearPolicy,
};

/// Health and education cess, as a fraction of tax after rebate (4%).
pub const CESS_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Old-regime standard deduction.
pub const OLD_STANDARD_DEDUCTION: i64 = 50_000;
/// Combined ceiling on section 80C investments and PF contribution.
pub const CAP_80C: i64 = 150_000;
/// Ceiling on the 80D premium for self and family.
pub const CAP_80D_SELF: i64 = 25_000;
/// Ceiling on the 80D premium for parents below sixty.
pub const CAP_80D_PARENTS: i64 = 25_000;
/// Ceiling on the 80D premium for senior-citizen parents.
pub const CAP_80D_PARENTS_SENIOR: i64 = 50_000;
/// Ceiling on home loan interest for a self-occupied property.
pub const CAP_HOME_LOAN: i64 = 200_000;
/// Old-regime rebate threshold.
pub const OLD_REBATE_THRESHOLD: i64 = 500_000;
/// New-regime rebate threshold.
pub const NEW_REBATE_THRESHOLD: i64 = 700_000;

fn old_regime() -> RegimePolicy {
    RegimePolicy {
        regime: Regime::Old,
        deductions: DeductionPolicy {
            standard_deduction: Decimal::from(OLD_STANDARD_DEDUCTION),
            itemized: Some(DeductionCaps {
                section_80c: Decimal::from(CAP_80C),
                section_80d_self: Decimal::from(CAP_80D_SELF),
                section_80d_parents: Decimal::from(CAP_80D_PARENTS),
                section_80d_parents_senior: Decimal::from(CAP_80D_PARENTS_SENIOR),
                home_loan_interest: Decimal::from(CAP_HOME_LOAN),
            }),
        },
        slabs: SlabTable::from_validated(vec![
            Bracket::new(0, 0),
            Bracket::new(250_000, 5),
            Bracket::new(500_000, 20),
            Bracket::new(1_000_000, 30),
        ]),
        rebate_threshold: Decimal::from(OLD_REBATE_THRESHOLD),
    }
}

fn new_regime(standard_deduction: i64, brackets: Vec<Bracket>) -> RegimePolicy {
    RegimePolicy {
        regime: Regime::New,
        deductions: DeductionPolicy {
            standard_deduction: Decimal::from(standard_deduction),
            itemized: None,
        },
        slabs: SlabTable::from_validated(brackets),
        rebate_threshold: Decimal::from(NEW_REBATE_THRESHOLD),
    }
}

fn april_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 4, 1).unwrap_or(NaiveDate::MIN)
}

impl TaxYearPolicy {
    /// FY 2023-24: new-regime standard deduction of 50,000 and 3L-wide slabs.
    pub fn fy2023_24() -> Self {
        Self {
            label: "FY 2023-24".to_string(),
            effective_date: april_first(2023),
            cess_rate: CESS_RATE,
            old_regime: old_regime(),
            new_regime: new_regime(
                50_000,
                vec![
                    Bracket::new(0, 0),
                    Bracket::new(300_000, 5),
                    Bracket::new(600_000, 10),
                    Bracket::new(900_000, 15),
                    Bracket::new(1_200_000, 20),
                    Bracket::new(1_500_000, 30),
                ],
            ),
        }
    }

    /// FY 2024-25: new-regime standard deduction of 75,000 and revised slabs.
    pub fn fy2024_25() -> Self {
        Self {
            label: "FY 2024-25".to_string(),
            effective_date: april_first(2024),
            cess_rate: CESS_RATE,
            old_regime: old_regime(),
            new_regime: new_regime(
                75_000,
                vec![
                    Bracket::new(0, 0),
                    Bracket::new(300_000, 5),
                    Bracket::new(700_000, 10),
                    Bracket::new(1_000_000, 15),
                    Bracket::new(1_200_000, 20),
                    Bracket::new(1_500_000, 30),
                ],
            ),
        }
    }

    /// The policy used by [`crate::calculation::calculate_tax`].
    pub fn current() -> Self {
        Self::fy2024_25()
    }
}
