//! Net pay and employer cost for sports Co.Co.Co compensation.
//!
//! # Computation
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Exemptions: min(gross, 5,000) for contributions, min(gross, 15,000) for tax |
//! | 2    | Raw contribution base: gross above the contribution exemption |
//! | 3    | Halved base: raw base × 50% (temporary relief) |
//! | 4    | IVS: halved base × 25% (24% with other mandatory coverage) |
//! | 5    | Supplementary: **raw** base × 2.03% |
//! | 6    | Total contributions, split 1/3 worker and 2/3 employer |
//! | 7    | Taxable income: gross above the tax exemption, less the worker share |
//! | 8    | IRPEF plus regional and municipal surtaxes on net taxable income |
//! | 9    | Withholding, net pay, employer cost, effective rate |
//!
//! All arithmetic is exact decimal. Nothing is rounded before the result is
//! returned, so the worker and employer shares always add back to the total.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cococo_core::calculations::common::round_half_up;
//! use cococo_core::compute;
//!
//! let result = compute(dec!(18000), false, dec!(1.23), dec!(0.5));
//!
//! assert_eq!(result.raw_contribution_base, dec!(13000));
//! assert_eq!(result.total_social_contribution, dec!(1888.9));
//! assert_eq!(round_half_up(result.net_pay), dec!(16784.17));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, percent_of};
use crate::calculations::income_tax::IncomeTaxSchedule;
use crate::{CompensationInput, CompensationResult, RuleYearConfig, RuleYearConfigError};

/// Computes a contract with the 2025 parameters.
///
/// Rates are percentages. Inputs are not validated; see
/// [`CompensationInput::validate`]. A non-positive `gross_compensation`
/// yields an all-zero result.
pub fn compute(
    gross_compensation: Decimal,
    has_other_coverage: bool,
    regional_rate: Decimal,
    municipal_rate: Decimal,
) -> CompensationResult {
    CompensationCalculator::trusted(RuleYearConfig::current()).calculate_parts(
        gross_compensation,
        has_other_coverage,
        regional_rate,
        municipal_rate,
    )
}

/// Intermediate contribution amounts, before taxation.
struct Contributions {
    contribution_exempt: Decimal,
    raw_base: Decimal,
    halved_base: Decimal,
    pension_rate: Decimal,
    pension: Decimal,
    supplementary: Decimal,
    total: Decimal,
    worker_share: Decimal,
    employer_share: Decimal,
}

/// Intermediate tax amounts.
struct Taxes {
    tax_exempt: Decimal,
    taxable_gross: Decimal,
    taxable_net: Decimal,
    income_tax: Decimal,
    regional: Decimal,
    municipal: Decimal,
    total: Decimal,
}

/// Calculator bound to one rule year.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use cococo_core::{CompensationCalculator, CompensationInput, RuleYearConfig};
///
/// let config = RuleYearConfig::year_2025();
/// let calculator = CompensationCalculator::new(&config).unwrap();
///
/// let input = CompensationInput {
///     gross_compensation: dec!(25000),
///     has_other_coverage: true,
///     ..CompensationInput::default()
/// };
/// let result = calculator.calculate(&input);
///
/// assert_eq!(result.pension_rate, dec!(24));
/// assert_eq!(result.taxable_income_gross, dec!(10000));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompensationCalculator<'a> {
    config: &'a RuleYearConfig,
}

impl<'a> CompensationCalculator<'a> {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleYearConfigError`] if the configuration is invalid.
    pub fn new(config: &'a RuleYearConfig) -> Result<Self, RuleYearConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Skips validation for configurations known to be valid.
    fn trusted(config: &'a RuleYearConfig) -> Self {
        Self { config }
    }

    /// The rule year parameters this calculator applies.
    pub fn config(&self) -> &'a RuleYearConfig {
        self.config
    }

    /// Computes every result field for `input`.
    ///
    /// Never fails: out-of-domain values are the caller's concern, and a
    /// non-positive gross compensation returns [`CompensationResult::default`].
    pub fn calculate(
        &self,
        input: &CompensationInput,
    ) -> CompensationResult {
        self.calculate_parts(
            input.gross_compensation,
            input.has_other_coverage,
            input.regional_surtax_rate,
            input.municipal_surtax_rate,
        )
    }

    fn calculate_parts(
        &self,
        gross: Decimal,
        has_other_coverage: bool,
        regional_rate: Decimal,
        municipal_rate: Decimal,
    ) -> CompensationResult {
        if gross <= Decimal::ZERO {
            if gross < Decimal::ZERO {
                warn!(gross = %gross, "negative gross compensation; treating as zero");
            }
            return CompensationResult::default();
        }

        let contributions = self.contributions(gross, has_other_coverage);
        let taxes = self.taxes(
            gross,
            contributions.worker_share,
            regional_rate,
            municipal_rate,
        );

        let total_worker_withholding = contributions.worker_share + taxes.total;
        let net_pay = gross - total_worker_withholding;
        let total_employer_cost = gross + contributions.employer_share;
        let effective_withholding_rate = self.effective_rate(gross, total_worker_withholding);

        if net_pay < Decimal::ZERO {
            warn!(
                gross = %gross,
                withholding = %total_worker_withholding,
                "withholding exceeds gross compensation"
            );
        }

        debug!(
            gross = %gross,
            contributions = %contributions.total,
            total_tax = %taxes.total,
            net_pay = %net_pay,
            "compensation computed"
        );

        CompensationResult {
            tax_exempt_threshold_applied: taxes.tax_exempt,
            contribution_exempt_threshold_applied: contributions.contribution_exempt,
            raw_contribution_base: contributions.raw_base,
            halved_contribution_base: contributions.halved_base,
            pension_rate: contributions.pension_rate,
            supplementary_rate: self.config.supplementary_rate,
            pension_contribution: contributions.pension,
            supplementary_contribution: contributions.supplementary,
            total_social_contribution: contributions.total,
            worker_share_contribution: contributions.worker_share,
            employer_share_contribution: contributions.employer_share,
            taxable_income_gross: taxes.taxable_gross,
            taxable_income_net: taxes.taxable_net,
            income_tax: taxes.income_tax,
            regional_surtax_amount: taxes.regional,
            municipal_surtax_amount: taxes.municipal,
            total_tax: taxes.total,
            total_worker_withholding,
            net_pay,
            total_employer_cost,
            effective_withholding_rate,
        }
    }

    /// Steps 1–6: exemption, bases, IVS, supplementary charge and the split.
    ///
    /// The employer share is the remainder after the worker's third, so the
    /// two shares reconstruct the total without drift.
    fn contributions(
        &self,
        gross: Decimal,
        has_other_coverage: bool,
    ) -> Contributions {
        let contribution_exempt = gross.min(self.config.contribution_exempt_cap);
        let raw_base = max(gross - contribution_exempt, Decimal::ZERO);
        let halved_base = raw_base * self.config.contribution_base_reduction;

        let pension_rate = self.config.pension_rate(has_other_coverage);
        let pension = percent_of(halved_base, pension_rate);
        // The relief halves the IVS base only.
        let supplementary = percent_of(raw_base, self.config.supplementary_rate);

        let total = pension + supplementary;
        let worker_share = total / Decimal::from(3);
        let employer_share = total - worker_share;

        Contributions {
            contribution_exempt,
            raw_base,
            halved_base,
            pension_rate,
            pension,
            supplementary,
            total,
            worker_share,
            employer_share,
        }
    }

    /// Steps 7–8: taxable income after the worker's deductible share, IRPEF
    /// and surtaxes.
    fn taxes(
        &self,
        gross: Decimal,
        worker_share: Decimal,
        regional_rate: Decimal,
        municipal_rate: Decimal,
    ) -> Taxes {
        let tax_exempt = gross.min(self.config.tax_exempt_cap);
        let taxable_gross = max(gross - tax_exempt, Decimal::ZERO);
        let taxable_net = max(taxable_gross - worker_share, Decimal::ZERO);

        let income_tax =
            IncomeTaxSchedule::new(&self.config.income_tax_brackets).tax_on(taxable_net);
        let regional = percent_of(taxable_net, regional_rate);
        let municipal = percent_of(taxable_net, municipal_rate);

        Taxes {
            tax_exempt,
            taxable_gross,
            taxable_net,
            income_tax,
            regional,
            municipal,
            total: income_tax + regional + municipal,
        }
    }

    /// Step 9: withholding as a percentage of gross, clamped to [0, 100].
    fn effective_rate(
        &self,
        gross: Decimal,
        withholding: Decimal,
    ) -> Decimal {
        let rate = withholding / gross * Decimal::ONE_HUNDRED;
        if rate > Decimal::ONE_HUNDRED || rate < Decimal::ZERO {
            warn!(rate = %rate, "effective withholding rate out of range; clamping");
        }
        rate.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }
}
