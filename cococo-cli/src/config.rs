//! Optional TOML configuration file.
//!
//! ```toml
//! [defaults]
//! gross_compensation = 24000
//! other_coverage = false
//! regional_surtax_rate = 1.73
//! municipal_surtax_rate = 0.8
//! activity = "Preparatore atletico"
//!
//! [rules]
//! contribution_exempt_cap = 5000
//! supplementary_rate = 2.03
//! ```
//!
//! Every key is optional. Missing `[defaults]` keys fall back to the built-in
//! form defaults and missing `[rules]` keys keep the 2025 parameters.

use std::path::{Path, PathBuf};

use cococo_core::{CompensationInput, IncomeTaxBracket, RuleYearConfig, RuleYearConfigError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or applying the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rule parameters: {0}")]
    Rules(#[from] RuleYearConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: InputDefaults,

    #[serde(default)]
    pub rules: RuleOverrides,
}

/// Default input values applied when a flag or CSV cell is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDefaults {
    pub gross_compensation: Option<Decimal>,
    pub other_coverage: Option<bool>,
    pub regional_surtax_rate: Option<Decimal>,
    pub municipal_surtax_rate: Option<Decimal>,
    pub activity: Option<String>,
}

impl InputDefaults {
    pub fn to_input(&self) -> CompensationInput {
        let base = CompensationInput::default();
        CompensationInput {
            gross_compensation: self.gross_compensation.unwrap_or(base.gross_compensation),
            has_other_coverage: self.other_coverage.unwrap_or(base.has_other_coverage),
            regional_surtax_rate: self
                .regional_surtax_rate
                .unwrap_or(base.regional_surtax_rate),
            municipal_surtax_rate: self
                .municipal_surtax_rate
                .unwrap_or(base.municipal_surtax_rate),
            activity_label: self.activity.clone().unwrap_or(base.activity_label),
        }
    }
}

/// Partial [`RuleYearConfig`]; set keys replace the 2025 values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOverrides {
    pub rule_year: Option<i32>,
    pub contribution_exempt_cap: Option<Decimal>,
    pub tax_exempt_cap: Option<Decimal>,
    pub contribution_base_reduction: Option<Decimal>,
    pub pension_rate_standard: Option<Decimal>,
    pub pension_rate_other_coverage: Option<Decimal>,
    pub supplementary_rate: Option<Decimal>,
    pub income_tax_brackets: Option<Vec<IncomeTaxBracket>>,
}

impl RuleOverrides {
    pub fn apply(
        &self,
        base: RuleYearConfig,
    ) -> RuleYearConfig {
        RuleYearConfig {
            rule_year: self.rule_year.unwrap_or(base.rule_year),
            contribution_exempt_cap: self
                .contribution_exempt_cap
                .unwrap_or(base.contribution_exempt_cap),
            tax_exempt_cap: self.tax_exempt_cap.unwrap_or(base.tax_exempt_cap),
            contribution_base_reduction: self
                .contribution_base_reduction
                .unwrap_or(base.contribution_base_reduction),
            pension_rate_standard: self
                .pension_rate_standard
                .unwrap_or(base.pension_rate_standard),
            pension_rate_other_coverage: self
                .pension_rate_other_coverage
                .unwrap_or(base.pension_rate_other_coverage),
            supplementary_rate: self.supplementary_rate.unwrap_or(base.supplementary_rate),
            income_tax_brackets: self
                .income_tax_brackets
                .clone()
                .unwrap_or(base.income_tax_brackets),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents)
    }

    /// The 2025 parameters with any `[rules]` overrides, validated.
    pub fn rule_year_config(&self) -> Result<RuleYearConfig, ConfigError> {
        let config = self.rules.apply(RuleYearConfig::year_2025());
        config.validate()?;
        Ok(config)
    }
}
