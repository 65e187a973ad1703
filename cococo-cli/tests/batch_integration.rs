//! Integration tests that run the batch path against on-disk fixture files.
//!
//! These complement the unit tests inside csv_loader.rs and config.rs (which
//! use inline literals) by exercising the read-from-disk path end-to-end.

use std::path::{Path, PathBuf};

use cococo_cli::config::AppConfig;
use cococo_cli::csv_loader;
use cococo_cli::report::{self, ContractReport};
use cococo_core::calculations::common::round_half_up;
use cococo_core::{CompensationCalculator, CompensationInput, RuleYearConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_batch() -> Vec<CompensationInput> {
    csv_loader::load_from_file(&fixture("collaborators.csv"), &CompensationInput::default())
        .expect("fixture file should load without error")
}

#[test]
fn test_load_fixture_file_succeeds() {
    assert_eq!(load_batch().len(), 3);
}

#[test]
fn test_first_row_matches_default_scenario() {
    let inputs = load_batch();
    let rules = RuleYearConfig::year_2025();
    let calculator = CompensationCalculator::new(&rules).unwrap();

    let result = calculator.calculate(&inputs[0]);

    assert_eq!(inputs[0], CompensationInput::default());
    assert_eq!(round_half_up(result.net_pay), dec!(16784.17));
}

#[test]
fn test_second_row_uses_reduced_pension_rate() {
    let inputs = load_batch();
    let rules = RuleYearConfig::year_2025();
    let calculator = CompensationCalculator::new(&rules).unwrap();

    let result = calculator.calculate(&inputs[1]);

    assert!(inputs[1].has_other_coverage);
    assert_eq!(result.pension_rate, dec!(24));
    assert_eq!(result.taxable_income_gross, dec!(10000));
}

#[test]
fn test_rows_below_tax_threshold_pay_no_tax() {
    let inputs = load_batch();
    let rules = RuleYearConfig::year_2025();
    let calculator = CompensationCalculator::new(&rules).unwrap();

    let result = calculator.calculate(&inputs[2]);

    assert_eq!(result.total_social_contribution, Decimal::ZERO);
    assert_eq!(result.total_tax, Decimal::ZERO);
    assert_eq!(result.net_pay, dec!(4500.00));
}

#[test]
fn test_config_defaults_fill_empty_rate_cells() {
    let config = AppConfig::load(&fixture("cococo.toml")).unwrap();
    let defaults = config.defaults.to_input();

    let inputs = csv_loader::load_from_file(&fixture("collaborators.csv"), &defaults).unwrap();

    assert_eq!(inputs[0].regional_surtax_rate, dec!(1.23));
    assert_eq!(inputs[1].regional_surtax_rate, dec!(1.73));
    assert_eq!(inputs[1].municipal_surtax_rate, dec!(0.8));
}

#[test]
fn test_config_brackets_match_builtin_schedule() {
    let config = AppConfig::load(&fixture("cococo.toml")).unwrap();

    let rules = config.rule_year_config().unwrap();

    assert_eq!(rules, RuleYearConfig::year_2025());
}

#[test]
fn test_batch_json_has_one_entry_per_row() {
    let inputs = load_batch();
    let rules = RuleYearConfig::year_2025();
    let calculator = CompensationCalculator::new(&rules).unwrap();
    let results: Vec<_> = inputs.iter().map(|i| calculator.calculate(i)).collect();
    let reports: Vec<_> = inputs
        .iter()
        .zip(&results)
        .map(|(input, result)| ContractReport::new(input, result))
        .collect();

    let json = report::render_json_batch(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[1]["input"]["activity_label"], "Maestro di sport");
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let result = csv_loader::load_from_file(
        Path::new("/this/path/does/not/exist.csv"),
        &CompensationInput::default(),
    );

    assert!(result.is_err());
}
