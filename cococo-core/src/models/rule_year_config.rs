use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::IncomeTaxBracket;

/// Errors reported by [`RuleYearConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleYearConfigError {
    /// The contribution exemption cap must be non-negative.
    #[error("contribution exemption cap must be non-negative, got {0}")]
    InvalidContributionExemptCap(Decimal),

    /// The tax exemption cap must be non-negative.
    #[error("tax exemption cap must be non-negative, got {0}")]
    InvalidTaxExemptCap(Decimal),

    /// The contribution base reduction must be a factor between 0 and 1.
    #[error("contribution base reduction must be between 0 and 1, got {0}")]
    InvalidBaseReduction(Decimal),

    /// A contribution rate (expressed in percent) must be between 0 and 100.
    #[error("{name} must be between 0 and 100, got {value}")]
    InvalidContributionRate { name: &'static str, value: Decimal },

    /// The bracket schedule is empty.
    #[error("income tax schedule has no brackets")]
    NoTaxBrackets,

    /// A bracket rate must be a factor between 0 and 1.
    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidBracketRate { index: usize, rate: Decimal },

    /// Brackets must be contiguous, ascending and open-ended at the top.
    #[error("bracket {index} does not continue the schedule")]
    DiscontinuousBrackets { index: usize },
}

/// Statutory parameters of one rule year.
///
/// Monetary caps are in euro. Contribution rates are percentages (`25` for
/// 25%), while `contribution_base_reduction` and bracket rates are fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleYearConfig {
    pub rule_year: i32,

    /// Compensation exempt from social-security contributions.
    pub contribution_exempt_cap: Decimal,

    /// Compensation exempt from income tax.
    pub tax_exempt_cap: Decimal,

    /// Factor applied to the contribution base for the pension contribution.
    ///
    /// The temporary relief halves the base, so this is `0.5`. It does not
    /// apply to the supplementary contribution.
    pub contribution_base_reduction: Decimal,

    /// IVS rate for workers with no other mandatory coverage.
    pub pension_rate_standard: Decimal,

    /// IVS rate for pensioners or workers already enrolled elsewhere.
    pub pension_rate_other_coverage: Decimal,

    /// Maternity, sickness, family allowance and DIS-COLL charge.
    pub supplementary_rate: Decimal,

    pub income_tax_brackets: Vec<IncomeTaxBracket>,
}

static CURRENT: OnceLock<RuleYearConfig> = OnceLock::new();

impl RuleYearConfig {
    /// Parameters in force for 2025.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cococo_core::RuleYearConfig;
    ///
    /// let config = RuleYearConfig::year_2025();
    ///
    /// assert_eq!(config.contribution_exempt_cap, dec!(5000));
    /// assert_eq!(config.tax_exempt_cap, dec!(15000));
    /// assert_eq!(config.income_tax_brackets.len(), 3);
    /// assert_eq!(config.validate(), Ok(()));
    /// ```
    pub fn year_2025() -> Self {
        Self {
            rule_year: 2025,
            contribution_exempt_cap: dec!(5000),
            tax_exempt_cap: dec!(15000),
            contribution_base_reduction: dec!(0.5),
            pension_rate_standard: dec!(25),
            pension_rate_other_coverage: dec!(24),
            supplementary_rate: dec!(2.03),
            income_tax_brackets: vec![
                IncomeTaxBracket {
                    lower_bound: dec!(0),
                    upper_bound: Some(dec!(28000)),
                    rate: dec!(0.23),
                },
                IncomeTaxBracket {
                    lower_bound: dec!(28000),
                    upper_bound: Some(dec!(50000)),
                    rate: dec!(0.35),
                },
                IncomeTaxBracket {
                    lower_bound: dec!(50000),
                    upper_bound: None,
                    rate: dec!(0.43),
                },
            ],
        }
    }

    /// Shared instance of [`RuleYearConfig::year_2025`], built once.
    pub fn current() -> &'static RuleYearConfig {
        CURRENT.get_or_init(Self::year_2025)
    }

    /// IVS rate for the given coverage situation.
    pub fn pension_rate(
        &self,
        has_other_coverage: bool,
    ) -> Decimal {
        if has_other_coverage {
            self.pension_rate_other_coverage
        } else {
            self.pension_rate_standard
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`RuleYearConfigError`] if:
    /// - either exemption cap is negative
    /// - `contribution_base_reduction` is not in [0, 1]
    /// - any contribution rate is not in [0, 100]
    /// - the bracket schedule is empty, has a rate outside [0, 1], or is not
    ///   a contiguous ascending sequence starting at zero and open at the top
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cococo_core::{RuleYearConfig, RuleYearConfigError};
    ///
    /// let config = RuleYearConfig {
    ///     tax_exempt_cap: dec!(-1),
    ///     ..RuleYearConfig::year_2025()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(RuleYearConfigError::InvalidTaxExemptCap(dec!(-1)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RuleYearConfigError> {
        if self.contribution_exempt_cap < Decimal::ZERO {
            return Err(RuleYearConfigError::InvalidContributionExemptCap(
                self.contribution_exempt_cap,
            ));
        }
        if self.tax_exempt_cap < Decimal::ZERO {
            return Err(RuleYearConfigError::InvalidTaxExemptCap(
                self.tax_exempt_cap,
            ));
        }
        if self.contribution_base_reduction < Decimal::ZERO
            || self.contribution_base_reduction > Decimal::ONE
        {
            return Err(RuleYearConfigError::InvalidBaseReduction(
                self.contribution_base_reduction,
            ));
        }

        let rates = [
            ("pension rate", self.pension_rate_standard),
            ("reduced pension rate", self.pension_rate_other_coverage),
            ("supplementary rate", self.supplementary_rate),
        ];
        for (name, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(RuleYearConfigError::InvalidContributionRate { name, value });
            }
        }

        self.validate_brackets()
    }

    fn validate_brackets(&self) -> Result<(), RuleYearConfigError> {
        let brackets = &self.income_tax_brackets;
        if brackets.is_empty() {
            return Err(RuleYearConfigError::NoTaxBrackets);
        }

        let mut expected_lower = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(RuleYearConfigError::InvalidBracketRate {
                    index,
                    rate: bracket.rate,
                });
            }
            if bracket.lower_bound != expected_lower {
                return Err(RuleYearConfigError::DiscontinuousBrackets { index });
            }

            let is_last = index + 1 == brackets.len();
            match bracket.upper_bound {
                Some(upper) if !is_last && upper > bracket.lower_bound => expected_lower = upper,
                None if is_last => {}
                _ => return Err(RuleYearConfigError::DiscontinuousBrackets { index }),
            }
        }
        Ok(())
    }
}

impl Default for RuleYearConfig {
    fn default() -> Self {
        Self::year_2025()
    }
}
