use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every amount the withholding agent reports for one contract.
///
/// Values are exact decimals; nothing is rounded here. Rates are percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Portion of compensation covered by the 15,000 income tax exemption.
    pub tax_exempt_threshold_applied: Decimal,

    /// Portion of compensation covered by the 5,000 contribution exemption.
    pub contribution_exempt_threshold_applied: Decimal,

    /// Compensation above the contribution exemption.
    pub raw_contribution_base: Decimal,

    /// Raw base after the temporary 50% relief; used for IVS only.
    pub halved_contribution_base: Decimal,

    pub pension_rate: Decimal,
    pub supplementary_rate: Decimal,

    /// IVS on the halved base.
    pub pension_contribution: Decimal,

    /// Supplementary charge on the full raw base.
    pub supplementary_contribution: Decimal,

    pub total_social_contribution: Decimal,

    /// One third of the total, withheld from the worker.
    pub worker_share_contribution: Decimal,

    /// The remaining two thirds, borne by the club.
    pub employer_share_contribution: Decimal,

    pub taxable_income_gross: Decimal,

    /// Taxable income after deducting the worker's contribution share.
    pub taxable_income_net: Decimal,

    pub income_tax: Decimal,
    pub regional_surtax_amount: Decimal,
    pub municipal_surtax_amount: Decimal,
    pub total_tax: Decimal,

    pub total_worker_withholding: Decimal,

    /// Gross minus withholding. Not clamped: extreme surtax rates can push it
    /// below zero.
    pub net_pay: Decimal,

    pub total_employer_cost: Decimal,

    /// Withholding as a percentage of gross, clamped to [0, 100].
    pub effective_withholding_rate: Decimal,
}

impl CompensationResult {
    /// Net pay spread over twelve monthly instalments.
    pub fn monthly_net_pay(&self) -> Decimal {
        self.net_pay / Decimal::from(12)
    }

    /// Whether any compensation fell under the contribution exemption.
    pub fn contribution_exemption_applied(&self) -> bool {
        self.contribution_exempt_threshold_applied > Decimal::ZERO
    }

    /// Whether any compensation fell under the income tax exemption.
    pub fn tax_exemption_applied(&self) -> bool {
        self.tax_exempt_threshold_applied > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_result_is_all_zero() {
        let result = CompensationResult::default();

        assert_eq!(result.net_pay, Decimal::ZERO);
        assert_eq!(result.monthly_net_pay(), Decimal::ZERO);
        assert!(!result.contribution_exemption_applied());
        assert!(!result.tax_exemption_applied());
    }

    #[test]
    fn monthly_net_pay_divides_by_twelve() {
        let result = CompensationResult {
            net_pay: dec!(16800),
            ..CompensationResult::default()
        };

        assert_eq!(result.monthly_net_pay(), dec!(1400));
    }

    #[test]
    fn exemption_flags_follow_thresholds() {
        let result = CompensationResult {
            contribution_exempt_threshold_applied: dec!(5000),
            tax_exempt_threshold_applied: dec!(0),
            ..CompensationResult::default()
        };

        assert!(result.contribution_exemption_applied());
        assert!(!result.tax_exemption_applied());
    }
}
