//! Income Tax Regime Engine
//!
//! This crate computes an individual's income-tax liability under the Old and
//! New regimes from a flat [`models::TaxInput`], and recommends the cheaper
//! regime. Regimes are described by data ([`models::TaxYearPolicy`]), either
//! compiled in or loaded from YAML through [`config::ConfigLoader`].
//!
//! ```
//! use regime_engine::calculate_tax;
//! use regime_engine::models::{Regime, TaxInput};
//! use rust_decimal::Decimal;
//!
//! let comparison = calculate_tax(&TaxInput {
//!     salary: Decimal::from(900_000),
//!     ..Default::default()
//! });
//! assert_eq!(comparison.suggested_regime, Regime::New);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{calculate_tax, calculate_tax_with_policy};
