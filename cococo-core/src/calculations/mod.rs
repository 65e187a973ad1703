//! Withholding calculations for sports Co.Co.Co contracts.
//!
//! [`income_tax`] holds the progressive IRPEF schedule; [`compensation`]
//! derives contributions, taxes, net pay and employer cost from it.

pub mod common;
pub mod compensation;
pub mod income_tax;

pub use compensation::{CompensationCalculator, compute};
pub use income_tax::{IncomeTaxSchedule, compute_income_tax};
