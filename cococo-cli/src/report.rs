//! Text and JSON rendering of computed contracts.

use cococo_core::{CompensationInput, CompensationResult, RuleYearConfig};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::display::{format_euro, format_percent, format_rate};

const LABEL_WIDTH: usize = 34;
const VALUE_WIDTH: usize = 16;

/// One computed contract, as serialized in JSON output.
#[derive(Debug, Serialize)]
pub struct ContractReport<'a> {
    pub input: &'a CompensationInput,
    pub result: &'a CompensationResult,
    pub monthly_net_pay: Decimal,
}

impl<'a> ContractReport<'a> {
    pub fn new(
        input: &'a CompensationInput,
        result: &'a CompensationResult,
    ) -> Self {
        Self {
            input,
            result,
            monthly_net_pay: result.monthly_net_pay(),
        }
    }
}

fn row(
    out: &mut String,
    label: &str,
    value: &str,
) {
    out.push_str(&format!("  {label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}\n"));
}

fn heading(
    out: &mut String,
    title: &str,
) {
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

/// Renders the full breakdown of one contract.
pub fn render_text(
    input: &CompensationInput,
    result: &CompensationResult,
    rule_year: i32,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Co.Co.Co sportivo - regole {rule_year}\n"));

    heading(&mut out, "Risultati");
    row(&mut out, "Compenso lordo", &format_euro(input.gross_compensation));
    row(&mut out, "Netto lavoratore", &format_euro(result.net_pay));
    row(&mut out, "Netto mensile", &format_euro(result.monthly_net_pay()));
    row(
        &mut out,
        "Tax rate effettivo",
        &format_percent(result.effective_withholding_rate),
    );

    heading(&mut out, "Panoramica generale");
    row(&mut out, "Tipo collaborazione", &input.activity_label);
    row(
        &mut out,
        "Costo totale società",
        &format_euro(result.total_employer_cost),
    );

    heading(&mut out, "Dettaglio contributivo");
    if result.contribution_exemption_applied() {
        out.push_str("  [Esenzione contributiva applicata]\n");
    }
    row(&mut out, "Compenso lordo", &format_euro(input.gross_compensation));
    row(
        &mut out,
        "Franchigia contributiva",
        &format_euro(result.contribution_exempt_threshold_applied),
    );
    row(
        &mut out,
        "Eccedenza imponibile",
        &format_euro(result.raw_contribution_base),
    );
    row(
        &mut out,
        "Base ridotta al 50%",
        &format_euro(result.halved_contribution_base),
    );
    row(&mut out, "Aliquota IVS", &format_rate(result.pension_rate));
    row(
        &mut out,
        "Contributi IVS",
        &format_euro(result.pension_contribution),
    );
    row(
        &mut out,
        &format!("Contributi aggiuntivi ({})", format_rate(result.supplementary_rate)),
        &format_euro(result.supplementary_contribution),
    );
    row(
        &mut out,
        "Totale contributi INPS",
        &format_euro(result.total_social_contribution),
    );
    row(
        &mut out,
        "Quota lavoratore (1/3)",
        &format_euro(result.worker_share_contribution),
    );
    row(
        &mut out,
        "Quota società (2/3)",
        &format_euro(result.employer_share_contribution),
    );

    heading(&mut out, "Dettaglio fiscale");
    if result.tax_exemption_applied() {
        out.push_str("  [Esenzione fiscale applicata]\n");
    }
    row(
        &mut out,
        "Franchigia fiscale",
        &format_euro(result.tax_exempt_threshold_applied),
    );
    row(
        &mut out,
        "Reddito imponibile lordo",
        &format_euro(result.taxable_income_gross),
    );
    row(
        &mut out,
        "Contributi deducibili",
        &format_euro(result.worker_share_contribution),
    );
    row(
        &mut out,
        "Reddito imponibile netto",
        &format_euro(result.taxable_income_net),
    );
    row(&mut out, "IRPEF", &format_euro(result.income_tax));
    row(
        &mut out,
        &format!("Addizionale regionale ({})", format_rate(input.regional_surtax_rate)),
        &format_euro(result.regional_surtax_amount),
    );
    row(
        &mut out,
        &format!("Addizionale comunale ({})", format_rate(input.municipal_surtax_rate)),
        &format_euro(result.municipal_surtax_amount),
    );
    row(&mut out, "Totale imposte", &format_euro(result.total_tax));

    heading(&mut out, "Riepilogo");
    row(&mut out, "Compenso lordo", &format_euro(input.gross_compensation));
    row(
        &mut out,
        "- Contributi lavoratore",
        &format_euro(result.worker_share_contribution),
    );
    row(&mut out, "- Imposte", &format_euro(result.total_tax));
    row(&mut out, "= Netto lavoratore", &format_euro(result.net_pay));
    row(
        &mut out,
        "Costo totale società",
        &format_euro(result.total_employer_cost),
    );

    out
}

/// Renders the progressive schedule of `config`.
pub fn render_brackets(config: &RuleYearConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Scaglioni IRPEF {}\n", config.rule_year));
    for bracket in &config.income_tax_brackets {
        let range = match bracket.upper_bound {
            Some(upper) => format!(
                "{} - {}",
                format_euro(bracket.lower_bound),
                format_euro(upper)
            ),
            None => format!("oltre {}", format_euro(bracket.lower_bound)),
        };
        row(
            &mut out,
            &range,
            &format_rate(bracket.rate * Decimal::ONE_HUNDRED),
        );
    }
    out
}

/// Serializes one contract as a pretty JSON object.
pub fn render_json(report: &ContractReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Serializes a batch as a pretty JSON array, even when it has one row.
pub fn render_json_batch(reports: &[ContractReport<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
