use cococo_core::CompensationInput;
use rust_decimal::Decimal;

/// Values given on the command line for a single computation.
///
/// Each field that is set replaces the corresponding field of the base input,
/// so flags take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub gross_compensation: Option<Decimal>,
    pub other_coverage: Option<bool>,
    pub regional_surtax_rate: Option<Decimal>,
    pub municipal_surtax_rate: Option<Decimal>,
    pub activity_label: Option<String>,
}

impl InputOverrides {
    pub fn apply(
        self,
        base: CompensationInput,
    ) -> CompensationInput {
        CompensationInput {
            gross_compensation: self.gross_compensation.unwrap_or(base.gross_compensation),
            has_other_coverage: self.other_coverage.unwrap_or(base.has_other_coverage),
            regional_surtax_rate: self
                .regional_surtax_rate
                .unwrap_or(base.regional_surtax_rate),
            municipal_surtax_rate: self
                .municipal_surtax_rate
                .unwrap_or(base.municipal_surtax_rate),
            activity_label: self.activity_label.unwrap_or(base.activity_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_overrides_keep_base() {
        let base = CompensationInput::default();

        assert_eq!(InputOverrides::default().apply(base.clone()), base);
    }

    #[test]
    fn set_fields_replace_base() {
        let overrides = InputOverrides {
            gross_compensation: Some(dec!(25000)),
            other_coverage: Some(true),
            municipal_surtax_rate: Some(dec!(0.8)),
            activity_label: Some("Maestro di sport".to_string()),
            ..InputOverrides::default()
        };

        let input = overrides.apply(CompensationInput::default());

        assert_eq!(input.gross_compensation, dec!(25000));
        assert!(input.has_other_coverage);
        assert_eq!(input.regional_surtax_rate, dec!(1.23));
        assert_eq!(input.municipal_surtax_rate, dec!(0.8));
        assert_eq!(input.activity_label, "Maestro di sport");
    }

    #[test]
    fn coverage_from_base_survives_absent_flag() {
        let base = CompensationInput {
            has_other_coverage: true,
            ..CompensationInput::default()
        };

        let input = InputOverrides::default().apply(base);

        assert!(input.has_other_coverage);
    }

    #[test]
    fn explicit_no_coverage_overrides_base() {
        let base = CompensationInput {
            has_other_coverage: true,
            ..CompensationInput::default()
        };
        let overrides = InputOverrides {
            other_coverage: Some(false),
            ..InputOverrides::default()
        };

        let input = overrides.apply(base);

        assert!(!input.has_other_coverage);
    }
}
