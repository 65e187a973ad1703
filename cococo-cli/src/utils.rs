use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Dot-grouped integer such as `18.000` or `1.250.000`.
static GROUPED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[1-9]\d{0,2}(\.\d{3})+$").expect("valid grouping pattern"));

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing.
///
/// When a comma is present it is the decimal separator and dots are thousands
/// separators (`"18.000,50"`). Without a comma, dots in groups of three are
/// thousands separators (`"18.000"`) and any other dot is the decimal
/// separator (`"0.5"`).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else if GROUPED_INTEGER.is_match(trimmed) {
        trimmed.replace('.', "")
    } else {
        trimmed.to_string()
    }
}

/// Parses a string into a [`Decimal`], accepting Italian or plain notation.
///
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a yes/no cell or flag value.
///
/// Accepts `true`/`false`, `yes`/`no`, `si`/`sì`, `1`/`0` and `x`, in any case.
/// Empty input is `false`.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Some(false),
        "true" | "yes" | "y" | "si" | "sì" | "s" | "1" | "x" => Some(true),
        _ => None,
    }
}
