//! Scan subcommand implementation.
//!
//! Handles `pscan scan`, which probes every host in the hosts list.

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::hosts::HostsList;
use crate::output::{self, ScanReport};
use crate::scanner::{ScanConfig, Scanner};
use crate::types::{Port, PortSpec};
use chrono::Utc;
use clap::Parser;
use indicatif::ProgressBar;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Run a port scan on the hosts list.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Ports to scan, in order (e.g., "22,80,443", "8000-8010") [default: 22,80,443]
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Connection timeout in milliseconds [default: 1000]
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

impl ScanCommand {
    /// Execute the scan command.
    ///
    /// Flags win over the settings file.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        hosts_file: &Path,
        settings: &AppSettings,
        verbose: bool,
    ) -> CliResult<()> {
        let port_spec: PortSpec = match &self.ports {
            Some(ports) => ports.parse()?,
            None => settings.port_spec()?,
        };
        let ports = port_spec.to_ports();

        let timeout = self
            .timeout
            .map(Duration::from_millis)
            .unwrap_or_else(|| settings.timeout());
        let config = ScanConfig::new().with_timeout(timeout);

        // The spinner shares stderr with the debug log, so only one of them.
        let progress = !verbose && self.output == OutputFormat::Plain;

        scan_action(out, hosts_file, &ports, &config, self.output, progress).await
    }
}

/// Scan every host in `hosts_file` against `ports` and write the report.
pub async fn scan_action<W: Write>(
    out: &mut W,
    hosts_file: &Path,
    ports: &[Port],
    config: &ScanConfig,
    format: OutputFormat,
    progress: bool,
) -> CliResult<()> {
    let mut hosts = HostsList::new();
    hosts.load(hosts_file)?;

    if hosts.is_empty() {
        output::print_warning(&format!(
            "no hosts in {}; add some with `pscan hosts add`",
            hosts_file.display()
        ));
    }

    let spinner = if progress && !hosts.is_empty() {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!(
            "Scanning {} hosts on {} ports...",
            hosts.len(),
            ports.len()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let started_at = Utc::now();
    let results = Scanner::new(config).run(&hosts, ports).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    output::write_report(out, &ScanReport::new(started_at, results), format)
}
