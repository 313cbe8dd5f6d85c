//! CSV output of findings.
//!
//! The header row is always written, so a scan without findings still
//! produces a well-formed file.

use crate::models::Finding;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Render findings as CSV bytes, header first.
pub fn render(findings: &[Finding]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(Finding::HEADERS)?;
    for finding in findings {
        writer.write_record(finding.to_row())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

/// Write findings to a CSV file at `path`, replacing any existing file.
#[instrument(level = "info", skip_all, fields(%path, rows = findings.len()))]
pub async fn write_findings(findings: &[Finding], path: &str) -> Result<(), Box<dyn Error>> {
    let bytes = render(findings)?;
    fs::write(path, bytes).await?;
    info!("Wrote CSV file");
    Ok(())
}
