use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cococo_core::{CompensationCalculator, CompensationInput, CompensationResult};
use rust_decimal::Decimal;
use tracing::{debug, info};

use cococo_cli::config::AppConfig;
use cococo_cli::options::InputOverrides;
use cococo_cli::report::{self, ContractReport};
use cococo_cli::{csv_loader, logging, utils};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net pay and club cost for sports Co.Co.Co contracts.
///
/// Applies the contribution and income tax exemptions, the 50% IVS base
/// relief, IRPEF and the local surtaxes, then prints the breakdown.
#[derive(Debug, Parser)]
#[command(name = "cococo", version)]
struct Cli {
    /// TOML file with default inputs and rule overrides.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Log computation steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a single contract.
    Calc(CalcArgs),

    /// Compute every row of a CSV file independently.
    Batch {
        /// CSV with activity, gross_compensation and optional
        /// other_coverage, regional_rate, municipal_rate columns.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the IRPEF brackets in use.
    Brackets,
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// Annual gross compensation in euro (0 – 200000).
    #[arg(long, value_parser = parse_decimal_arg)]
    gross: Option<Decimal>,

    /// The worker already has a pension or other mandatory coverage (IVS 24%).
    ///
    /// A bare flag means yes; `--other-coverage no` overrides a config default.
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_flag_arg
    )]
    other_coverage: Option<bool>,

    /// Regional IRPEF surtax in percent (0 – 3.33).
    #[arg(long, value_parser = parse_decimal_arg)]
    regional: Option<Decimal>,

    /// Municipal IRPEF surtax in percent (0 – 0.8).
    #[arg(long, value_parser = parse_decimal_arg)]
    municipal: Option<Decimal>,

    /// Kind of sports collaboration, shown in the report.
    #[arg(long)]
    activity: Option<String>,
}

impl From<CalcArgs> for InputOverrides {
    fn from(args: CalcArgs) -> Self {
        Self {
            gross_compensation: args.gross,
            other_coverage: args.other_coverage,
            regional_surtax_rate: args.regional,
            municipal_surtax_rate: args.municipal,
            activity_label: args.activity,
        }
    }
}

fn parse_decimal_arg(s: &str) -> Result<Decimal, utils::ParseDecimalError> {
    utils::parse_decimal(s)
}

fn parse_flag_arg(s: &str) -> Result<bool, String> {
    utils::parse_flag(s).ok_or_else(|| format!("invalid flag '{s}', expected si/no or true/false"))
}

// ─── commands ────────────────────────────────────────────────────────────────

fn emit(
    format: OutputFormat,
    contracts: &[(CompensationInput, CompensationResult)],
    rule_year: i32,
    batch: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let sections: Vec<String> = contracts
                .iter()
                .map(|(input, result)| report::render_text(input, result, rule_year))
                .collect();
            print!("{}", sections.join("\n\n"));
        }
        OutputFormat::Json => {
            let reports: Vec<ContractReport<'_>> = contracts
                .iter()
                .map(|(input, result)| ContractReport::new(input, result))
                .collect();
            let json = match reports.as_slice() {
                [single] if !batch => report::render_json(single),
                all => report::render_json_batch(all),
            }
            .context("Failed to serialize results")?;
            println!("{json}");
        }
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let app_config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    let rules = app_config
        .rule_year_config()
        .context("Invalid [rules] in config")?;
    let calculator = CompensationCalculator::new(&rules)?;
    let defaults = app_config.defaults.to_input();

    debug!(rule_year = rules.rule_year, "calculator ready");

    match cli.command {
        Command::Calc(args) => {
            let input = InputOverrides::from(args).apply(defaults);
            input.validate().context("Invalid input")?;
            let result = calculator.calculate(&input);
            emit(cli.output, &[(input, result)], rules.rule_year, false)?;
        }
        Command::Batch { file } => {
            let inputs = csv_loader::load_from_file(&file, &defaults)
                .with_context(|| format!("Failed to load batch: {}", file.display()))?;
            info!(rows = inputs.len(), "computing batch");

            let contracts: Vec<_> = inputs
                .into_iter()
                .map(|input| {
                    let result = calculator.calculate(&input);
                    (input, result)
                })
                .collect();
            emit(cli.output, &contracts, rules.rule_year, true)?;
        }
        Command::Brackets => match cli.output {
            OutputFormat::Text => print!("{}", report::render_brackets(calculator.config())),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&calculator.config().income_tax_brackets)
                    .context("Failed to serialize brackets")?
            ),
        },
    }

    Ok(())
}
