//! Italian display conventions: `€ 1.234,56` and `12,34%`.

use cococo_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats an amount as euro with `.` thousands and `,` decimals.
///
/// Rounds half-up to the cent. Negative amounts carry a leading minus after
/// the currency sign (`€ -1.234,56`).
pub fn format_euro(amount: Decimal) -> String {
    format!("€ {}", format_decimal(amount, true))
}

/// Formats a percentage with two decimals and a comma separator.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", format_decimal(rate, false))
}

/// Formats a rate without trailing zeros (`25%`, `2,03%`).
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize().to_string().replace('.', ","))
}

fn format_decimal(
    value: Decimal,
    group_thousands: bool,
) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let integer = if group_thousands {
        group(integer)
    } else {
        integer.to_string()
    };
    format!("{sign}{integer},{fraction}")
}

fn group(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn euro_groups_thousands_with_dots() {
        assert_eq!(format_euro(dec!(18000)), "€ 18.000,00");
        assert_eq!(format_euro(dec!(1234567.891)), "€ 1.234.567,89");
    }

    #[test]
    fn euro_small_amounts_have_no_separator() {
        assert_eq!(format_euro(dec!(0)), "€ 0,00");
        assert_eq!(format_euro(dec!(263.9)), "€ 263,90");
        assert_eq!(format_euro(dec!(999.995)), "€ 1.000,00");
    }

    #[test]
    fn euro_rounds_repeating_thirds() {
        assert_eq!(format_euro(dec!(1888.9) / dec!(3)), "€ 629,63");
    }

    #[test]
    fn euro_negative_amount() {
        assert_eq!(format_euro(dec!(-4321.5)), "€ -4.321,50");
    }

    #[test]
    fn euro_tiny_negative_rounds_to_zero_without_sign() {
        assert_eq!(format_euro(dec!(-0.001)), "€ 0,00");
    }

    #[test]
    fn percent_uses_comma() {
        assert_eq!(format_percent(dec!(6.754583)), "6,75%");
        assert_eq!(format_percent(dec!(100)), "100,00%");
    }

    #[test]
    fn rate_drops_trailing_zeros() {
        assert_eq!(format_rate(dec!(25)), "25%");
        assert_eq!(format_rate(dec!(2.030)), "2,03%");
    }
}
