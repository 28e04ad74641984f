//! Plain text output formatting.
//!
//! The report layout is fixed so it can be parsed by line: a header line per
//! host, a tab-indented line per port, and a blank line after each host.
//! Status messages go to stderr with colors.

use crate::scanner::ScanResult;
use console::style;
use std::io::{self, Write};

/// Write scan results in plain text.
pub fn write_plain<W: Write>(out: &mut W, results: &[ScanResult]) -> io::Result<()> {
    for result in results {
        if result.not_found {
            writeln!(out, "{}: Host not found", result.host)?;
            writeln!(out)?;
            continue;
        }

        writeln!(out, "{}:", result.host)?;
        for port in &result.ports {
            writeln!(out, "\t{}: {}", port.port, port.state)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write one host per line, in list order.
pub fn write_hosts<'a, W, I>(out: &mut W, hosts: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for host in hosts {
        writeln!(out, "{}", host)?;
    }
    Ok(())
}

/// Write one confirmation line per added host.
pub fn write_added<W: Write>(out: &mut W, hosts: &[String]) -> io::Result<()> {
    for host in hosts {
        writeln!(out, "Added host: {}", host)?;
    }
    Ok(())
}

/// Write one confirmation line per deleted host.
pub fn write_deleted<W: Write>(out: &mut W, hosts: &[String]) -> io::Result<()> {
    for host in hosts {
        writeln!(out, "Deleted host: {}", host)?;
    }
    Ok(())
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
