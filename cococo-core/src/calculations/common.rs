//! Decimal helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Calculators never call this on intermediate values; it exists for the
/// reporting boundary and for tests that compare to the cent.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cococo_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(629.6333)), dec!(629.63));
/// assert_eq!(round_half_up(dec!(1215.825)), dec!(1215.83));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cococo_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-250.00), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(3000.00), dec!(0)), dec!(3000.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Applies a rate expressed in percent: `amount × rate / 100`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cococo_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(13000), dec!(2.03)), dec!(263.9));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(545.1843)), dec!(545.18));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(1215.825)), dec!(1215.83));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35));
    }

    #[test]
    fn round_half_up_handles_repeating_thirds() {
        let third = dec!(1888.9) / dec!(3);

        assert_eq!(round_half_up(third), dec!(629.63));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_floors_negative_at_zero() {
        assert_eq!(max(dec!(-0.01), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_applies_whole_rate() {
        assert_eq!(percent_of(dec!(6500), dec!(25)), dec!(1625));
    }

    #[test]
    fn percent_of_zero_rate_is_zero() {
        assert_eq!(percent_of(dec!(2370.37), dec!(0)), Decimal::ZERO);
    }
}
