//! Core data models for the regime engine.
//!
//! This module contains the input record, the policy tables that drive the
//! calculation, and the result records returned to callers.

mod policy;
mod salary_slip;
mod tax_input;
mod tax_result;

pub use policy::{Bracket, DeductionCaps, DeductionPolicy, RegimePolicy, SlabTable, TaxYearPolicy};
pub use salary_slip::SalarySlip;
pub use tax_input::{EmploymentType, TaxInput};
pub use tax_result::{ComparisonResult, Regime, Settlement, SlabDetail, TaxResult};
