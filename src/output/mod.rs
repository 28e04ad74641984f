//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of scan results,
//! plus styled status messages on stderr.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_warning, write_added, write_deleted, write_hosts, write_plain};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::scanner::ScanResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// One scan invocation, as rendered by the structured formats.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// When the scan was started.
    pub started_at: DateTime<Utc>,
    /// When the last probe finished.
    pub completed_at: DateTime<Utc>,
    /// Per-host results in hosts list order.
    pub results: Vec<ScanResult>,
}

impl ScanReport {
    pub fn new(started_at: DateTime<Utc>, results: Vec<ScanResult>) -> Self {
        Self {
            started_at,
            completed_at: Utc::now(),
            results,
        }
    }
}

/// Write scan results to `out` in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => write_plain(out, &report.results)?,
        OutputFormat::Json => write_json(out, report)?,
        OutputFormat::Csv => write_csv(out, &report.results)?,
    }
    Ok(())
}
