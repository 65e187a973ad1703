pub mod calculations;
pub mod models;

pub use calculations::{CompensationCalculator, compute, compute_income_tax};
pub use models::*;
