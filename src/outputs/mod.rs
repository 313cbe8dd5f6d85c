//! Output generation for scan results.
//!
//! # Submodules
//!
//! - [`csv`]: one row per finding with `"Yes"`/`"No"` flags (default)
//! - [`json`]: the whole [`ScanReport`] including run statistics
//! - [`preview`]: a short aligned table of the first findings for the console
//!
//! # CSV layout
//!
//! ```text
//! Article URL,Disease,Symptoms Found,Preventive Measures Found
//! https://www.medicalnewstoday.com/articles/325,Asthma,No,Yes
//! ```

pub mod csv;
pub mod json;
pub mod preview;

use crate::models::ScanReport;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// File format of the scan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Write `report` to `path` in the requested format.
pub async fn write_report(
    report: &ScanReport,
    path: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Csv => csv::write_findings(&report.findings, path).await,
        OutputFormat::Json => json::write_report(report, path).await,
    }
}
