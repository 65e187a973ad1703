//! Progressive IRPEF schedule.
//!
//! Each bracket taxes only the slice of income that falls between its bounds,
//! so the total is continuous across every threshold.
//!
//! | Taxable income      | Marginal rate |
//! |---------------------|---------------|
//! | up to 28,000        | 23%           |
//! | 28,000 – 50,000     | 35%           |
//! | over 50,000         | 43%           |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cococo_core::compute_income_tax;
//!
//! // 28,000 × 23% + 2,000 × 35%
//! assert_eq!(compute_income_tax(dec!(30000)), dec!(7140));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::{IncomeTaxBracket, RuleYearConfig};

/// Computes IRPEF on `taxable_income` with the 2025 schedule.
///
/// Total over all inputs: zero or negative income yields zero tax.
pub fn compute_income_tax(taxable_income: Decimal) -> Decimal {
    IncomeTaxSchedule::new(&RuleYearConfig::current().income_tax_brackets).tax_on(taxable_income)
}

/// A cumulative marginal-rate schedule over a slice of brackets.
///
/// The brackets are expected to satisfy [`RuleYearConfig::validate`].
#[derive(Debug, Clone, Copy)]
pub struct IncomeTaxSchedule<'a> {
    brackets: &'a [IncomeTaxBracket],
}

impl<'a> IncomeTaxSchedule<'a> {
    /// Wraps a bracket list ordered from the lowest bound.
    pub fn new(brackets: &'a [IncomeTaxBracket]) -> Self {
        Self { brackets }
    }

    /// Sums each bracket's rate over its slice of `taxable_income`.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let tax: Decimal = self
            .brackets
            .iter()
            .map(|bracket| bracket.slice_of(taxable_income) * bracket.rate)
            .sum();

        trace!(taxable_income = %taxable_income, tax = %tax, "income tax computed");
        tax
    }
}
