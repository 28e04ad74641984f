//! JSON output formatting.

use super::ScanReport;
use std::io::Write;

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
