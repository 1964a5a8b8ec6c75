//! Tax-year policy configuration for the regime engine.
//!
//! Policies are available two ways: compiled in (see
//! [`crate::models::TaxYearPolicy::current`]) or loaded from a directory of
//! YAML files through [`ConfigLoader`], which selects the policy in force on a
//! given date.
//!
//! # Example
//!
//! ```no_run
//! use regime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/income_tax").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{
    CAP_80C, CAP_80D_PARENTS, CAP_80D_PARENTS_SENIOR, CAP_80D_SELF, CAP_HOME_LOAN, CESS_RATE,
    NEW_REBATE_THRESHOLD, OLD_REBATE_THRESHOLD, OLD_STANDARD_DEDUCTION,
};
pub use loader::ConfigLoader;
pub use types::{PolicyConfig, ScheduleMetadata};
