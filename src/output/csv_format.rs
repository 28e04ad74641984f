//! CSV output formatting.

use crate::scanner::ScanResult;
use std::io::Write;

/// Write results as CSV, one row per probed port.
///
/// A host that did not resolve gets a single row with empty port and state.
pub fn write_csv<W: Write>(out: &mut W, results: &[ScanResult]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["host", "found", "port", "state"])?;

    for result in results {
        let found = (!result.not_found).to_string();
        if result.ports.is_empty() {
            wtr.write_record([result.host.as_str(), found.as_str(), "", ""])?;
            continue;
        }
        for port in &result.ports {
            let number = port.port.to_string();
            let state = port.state.to_string();
            wtr.write_record([
                result.host.as_str(),
                found.as_str(),
                number.as_str(),
                state.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
