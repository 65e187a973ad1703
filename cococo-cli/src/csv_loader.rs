//! CSV loader for batch computations.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name).
//!
//! | Column               | Required | Type    | Notes |
//! |----------------------|----------|---------|-------|
//! | `activity`           | yes      | string  | Informational label |
//! | `gross_compensation` | yes      | decimal | e.g. `18000.00` |
//! | `other_coverage`     | no       | flag    | `true`/`false`, `si`/`no`, `1`/`0`; empty means no |
//! | `regional_rate`      | no       | decimal | Percent; empty falls back to the default |
//! | `municipal_rate`     | no       | decimal | Percent; empty falls back to the default |
//!
//! Each row is an independent contract; rows are never summed.
//!
//! ### Example
//!
//! ```csv
//! activity,gross_compensation,other_coverage,regional_rate,municipal_rate
//! Istruttore/Allenatore,18000,no,1.23,0.5
//! Maestro di sport,25000,si,,
//! ```

use std::path::{Path, PathBuf};

use cococo_core::{CompensationInput, InvalidInputError};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::utils::parse_flag;

#[derive(Debug, Deserialize)]
struct CsvRow {
    activity: String,
    gross_compensation: Decimal,
    #[serde(default, deserialize_with = "deserialize_flag")]
    other_coverage: bool,
    regional_rate: Option<Decimal>,
    municipal_rate: Option<Decimal>,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    let s = s.unwrap_or_default();
    parse_flag(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid flag '{s}'")))
}

/// Errors that can occur while loading batch rows.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, type mismatch, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but holds a value outside the accepted domain.
    /// `row` is 1-based, not counting the header.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InvalidInputError,
    },
}

/// Convert a single CSV row into a validated input.
fn convert_row(
    row: CsvRow,
    row_number: usize,
    defaults: &CompensationInput,
) -> Result<CompensationInput, CsvLoadError> {
    let input = CompensationInput {
        gross_compensation: row.gross_compensation,
        has_other_coverage: row.other_coverage,
        regional_surtax_rate: row.regional_rate.unwrap_or(defaults.regional_surtax_rate),
        municipal_surtax_rate: row
            .municipal_rate
            .unwrap_or(defaults.municipal_surtax_rate),
        activity_label: row.activity,
    };

    input
        .validate()
        .map_err(|source| CsvLoadError::InvalidRow {
            row: row_number,
            source,
        })?;
    Ok(input)
}

/// Parse CSV text and return one validated input per row, in file order.
///
/// Empty rate cells take the rates from `defaults`.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – structurally invalid CSV or a bad cell.
/// * [`CsvLoadError::InvalidRow`] – the first row with an out-of-domain value.
pub fn load_from_str(
    input: &str,
    defaults: &CompensationInput,
) -> Result<Vec<CompensationInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1, defaults)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    defaults: &CompensationInput,
) -> Result<Vec<CompensationInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents, defaults)
}
