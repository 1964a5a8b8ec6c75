//! Calculation logic for the regime engine.
//!
//! This module contains the deduction normalizer, the generic slab walker,
//! the rebate and cess applier, the regime comparator built from them, and
//! settlement of withheld tax against the recommended regime. Every function
//! here is pure and total.

mod comparison;
mod deductions;
mod rebate_cess;
mod settlement;
mod slabs;

pub use comparison::{calculate_regime, calculate_tax, calculate_tax_with_policy, compare_results};
pub use deductions::{DeductionOutcome, normalize_income};
pub use rebate_cess::{RebateCessOutcome, apply_rebate_and_cess};
pub use settlement::settle;
pub use slabs::{SlabCalculation, calculate_slab_tax, slab_label};
