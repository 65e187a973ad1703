mod compensation_input;
mod compensation_result;
mod income_tax_bracket;
mod rule_year_config;

pub use compensation_input::{
    CompensationInput, InvalidInputError, MAX_GROSS_COMPENSATION, MAX_MUNICIPAL_SURTAX_RATE,
    MAX_REGIONAL_SURTAX_RATE,
};
pub use compensation_result::CompensationResult;
pub use income_tax_bracket::IncomeTaxBracket;
pub use rule_year_config::{RuleYearConfig, RuleYearConfigError};
