use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted for the annual gross compensation.
pub const MAX_GROSS_COMPENSATION: Decimal = dec!(200000);

/// Upper bound accepted for the regional IRPEF surtax, in percent.
pub const MAX_REGIONAL_SURTAX_RATE: Decimal = dec!(3.33);

/// Upper bound accepted for the municipal IRPEF surtax, in percent.
pub const MAX_MUNICIPAL_SURTAX_RATE: Decimal = dec!(0.8);

/// An input value outside its declared domain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("gross compensation must be between 0 and 200000, got {0}")]
    GrossCompensation(Decimal),

    #[error("regional surtax rate must be between 0 and 3.33%, got {0}")]
    RegionalSurtaxRate(Decimal),

    #[error("municipal surtax rate must be between 0 and 0.8%, got {0}")]
    MunicipalSurtaxRate(Decimal),
}

/// The values a withholding agent needs to settle one Co.Co.Co contract.
///
/// Surtax rates are percentages (`1.23` for 1.23%). `activity_label` is
/// carried through for display and never enters the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    pub gross_compensation: Decimal,
    pub has_other_coverage: bool,
    pub regional_surtax_rate: Decimal,
    pub municipal_surtax_rate: Decimal,
    pub activity_label: String,
}

impl CompensationInput {
    /// Checks every numeric field against its domain.
    ///
    /// The calculator itself never rejects input; callers that accept values
    /// from users run this first.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cococo_core::{CompensationInput, InvalidInputError};
    ///
    /// let input = CompensationInput {
    ///     municipal_surtax_rate: dec!(0.9),
    ///     ..CompensationInput::default()
    /// };
    ///
    /// assert_eq!(
    ///     input.validate(),
    ///     Err(InvalidInputError::MunicipalSurtaxRate(dec!(0.9)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !in_range(self.gross_compensation, MAX_GROSS_COMPENSATION) {
            return Err(InvalidInputError::GrossCompensation(
                self.gross_compensation,
            ));
        }
        if !in_range(self.regional_surtax_rate, MAX_REGIONAL_SURTAX_RATE) {
            return Err(InvalidInputError::RegionalSurtaxRate(
                self.regional_surtax_rate,
            ));
        }
        if !in_range(self.municipal_surtax_rate, MAX_MUNICIPAL_SURTAX_RATE) {
            return Err(InvalidInputError::MunicipalSurtaxRate(
                self.municipal_surtax_rate,
            ));
        }
        Ok(())
    }
}

fn in_range(
    value: Decimal,
    upper: Decimal,
) -> bool {
    value >= Decimal::ZERO && value <= upper
}

impl Default for CompensationInput {
    /// The values the collaboration form is pre-filled with.
    fn default() -> Self {
        Self {
            gross_compensation: dec!(18000),
            has_other_coverage: false,
            regional_surtax_rate: dec!(1.23),
            municipal_surtax_rate: dec!(0.5),
            activity_label: "Istruttore/Allenatore".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        assert_eq!(CompensationInput::default().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_domain_bounds() {
        let lower = CompensationInput {
            gross_compensation: dec!(0),
            regional_surtax_rate: dec!(0),
            municipal_surtax_rate: dec!(0),
            ..CompensationInput::default()
        };
        let upper = CompensationInput {
            gross_compensation: dec!(200000),
            regional_surtax_rate: dec!(3.33),
            municipal_surtax_rate: dec!(0.8),
            ..CompensationInput::default()
        };

        assert_eq!(lower.validate(), Ok(()));
        assert_eq!(upper.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_compensation() {
        let input = CompensationInput {
            gross_compensation: dec!(-1),
            ..CompensationInput::default()
        };

        assert_eq!(
            input.validate(),
            Err(InvalidInputError::GrossCompensation(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_compensation_above_cap() {
        let input = CompensationInput {
            gross_compensation: dec!(200000.01),
            ..CompensationInput::default()
        };

        assert_eq!(
            input.validate(),
            Err(InvalidInputError::GrossCompensation(dec!(200000.01)))
        );
    }

    #[test]
    fn validate_rejects_regional_rate_above_cap() {
        let input = CompensationInput {
            regional_surtax_rate: dec!(3.34),
            ..CompensationInput::default()
        };

        assert_eq!(
            input.validate(),
            Err(InvalidInputError::RegionalSurtaxRate(dec!(3.34)))
        );
    }

    #[test]
    fn validate_rejects_negative_municipal_rate() {
        let input = CompensationInput {
            municipal_surtax_rate: dec!(-0.1),
            ..CompensationInput::default()
        };

        assert_eq!(
            input.validate(),
            Err(InvalidInputError::MunicipalSurtaxRate(dec!(-0.1)))
        );
    }

    #[test]
    fn error_message_names_the_bound() {
        let err = InvalidInputError::RegionalSurtaxRate(dec!(5));

        assert_eq!(
            err.to_string(),
            "regional surtax rate must be between 0 and 3.33%, got 5"
        );
    }
}
