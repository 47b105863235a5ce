//! High-level load API: dataset file → validated [`Portfolio`].
//!
//! # Example
//!
//! ```rust,ignore
//! use folio::transform::load_portfolio;
//!
//! let report = load_portfolio("data/portfolio.csv")?;
//! println!("Loaded {} projects", report.portfolio.projects.len());
//! ```

use serde::Serialize;
use std::path::Path;

use crate::api::logs::{log_info, log_success, log_warning};
use crate::error::LoadResult;
use crate::models::{Portfolio, Section};
use crate::parser::{parse_bytes_auto, parse_file_auto, unknown_columns, ParseResult};
use crate::validation::{validate_portfolio, Warning};

use super::shaper::shape_rows;

/// Dataset information
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Result of a complete load
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Shaped, validated portfolio
    pub portfolio: Portfolio,
    /// Dataset metadata
    pub csv_info: CsvInfo,
    /// Non-fatal findings, in discovery order
    pub warnings: Vec<Warning>,
}

/// Load a portfolio from a dataset file.
///
/// 1. Parses the CSV with encoding/delimiter auto-detection
/// 2. Groups rows by section and shapes every entity
/// 3. Validates required profile keys (fatal) and reports warnings
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> LoadResult<LoadReport> {
    log_info(format!("📖 Reading dataset {}", path.as_ref().display()));
    let parse_result = parse_file_auto(path)?;
    load_parsed(parse_result)
}

/// Load a portfolio from raw dataset bytes.
pub fn load_portfolio_bytes(bytes: &[u8]) -> LoadResult<LoadReport> {
    log_info("📖 Reading dataset from memory");
    let parse_result = parse_bytes_auto(bytes)?;
    load_parsed(parse_result)
}

fn load_parsed(parse_result: ParseResult) -> LoadResult<LoadReport> {
    log_success(format!("Detected encoding: {}", parse_result.encoding));
    log_success(format!("Detected separator: '{}'", format_delimiter(parse_result.delimiter)));
    log_success(format!("Read {} rows", parse_result.rows.len() + parse_result.skipped.len()));
    for column in unknown_columns(&parse_result.headers) {
        log_warning(format!("Ignoring unknown column '{}'", column));
    }

    let csv_info = CsvInfo {
        encoding: parse_result.encoding,
        delimiter: parse_result.delimiter,
        headers: parse_result.headers,
        row_count: parse_result.rows.len(),
    };

    let mut warnings: Vec<Warning> = parse_result.skipped.into_iter().map(Warning::from).collect();

    log_info("📦 Shaping sections...");
    let shaped = shape_rows(&parse_result.rows);
    warnings.extend(shaped.warnings);

    let portfolio = shaped.portfolio;
    warnings.extend(validate_portfolio(&portfolio)?);

    for warning in &warnings {
        log_warning(warning.to_string());
    }

    log_success(format!(
        "Portfolio for {}: {} skill groups, {} {}, {} {}, {} {}, {} {}",
        portfolio.name(),
        portfolio.skills.len(),
        portfolio.projects.len(),
        Section::Project,
        portfolio.extensions.len(),
        Section::Extension,
        portfolio.certificates.len(),
        Section::Certificate,
        portfolio.recognitions.len(),
        Section::Recognition,
    ));

    Ok(LoadReport {
        portfolio,
        csv_info,
        warnings,
    })
}

/// Format delimiter for display
pub fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
