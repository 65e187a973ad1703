use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the progressive IRPEF schedule.
///
/// `rate` is a fraction (`0.23` for 23%). The last bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl IncomeTaxBracket {
    /// Portion of `taxable_income` that falls inside this bracket.
    pub fn slice_of(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let ceiling = match self.upper_bound {
            Some(upper) => upper.min(taxable_income),
            None => taxable_income,
        };
        (ceiling - self.lower_bound).max(Decimal::ZERO)
    }
}
