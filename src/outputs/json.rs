//! JSON output of a whole scan.
//!
//! Unlike the CSV output, the JSON file carries the run statistics along with
//! the findings, and the symptom/prevention flags stay booleans:
//!
//! ```json
//! {
//!   "generatedAt": "2025-05-06T08:00:00+02:00",
//!   "seedUrl": "https://www.medicalnewstoday.com/categories/diseases-and-conditions",
//!   "linksDiscovered": 42,
//!   "articlesScanned": 10,
//!   "articlesSkipped": 0,
//!   "findings": [
//!     {
//!       "sourceLink": "...",
//!       "diseaseName": "Asthma",
//!       "symptomsFound": false,
//!       "preventionFound": true
//!     }
//!   ]
//! }
//! ```

use crate::models::ScanReport;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`ScanReport`] as pretty-printed JSON to `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_report(report: &ScanReport, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write JSON report");
        return Err(e.into());
    }
    info!(findings = report.findings.len(), "Wrote JSON report");

    Ok(())
}
