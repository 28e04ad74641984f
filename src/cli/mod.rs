//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `pscan hosts add|list|delete` - Manage the hosts list
//! - `pscan scan` - Scan every host in the list
//!
//! The subcommand table is the static [`Commands`] enum; each handler is a
//! plain function writing to any `io::Write`, so the same code backs the
//! binary and the tests.

mod hosts;
mod scan;

pub use hosts::{add_action, delete_action, list_action, HostsAction, HostsCommand};
pub use scan::{scan_action, ScanCommand};

use crate::config::AppSettings;
use crate::error::{CliResult, ConfigResult};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

/// pscan - a TCP port scanner for a list of hosts.
///
/// pscan keeps a list of hosts in a file and checks which TCP ports are
/// open on each of them.
#[derive(Parser, Debug)]
#[command(name = "pscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fast TCP port scanner", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// File holding the hosts list
    #[arg(short = 'f', long, global = true, env = "PSCAN_HOSTS_FILE", value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,

    /// Path to a settings file (default: <config dir>/pscan/settings.json)
    #[arg(long, global = true, env = "PSCAN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the hosts list
    #[command(alias = "h")]
    Hosts(HostsCommand),

    /// Run a port scan on the hosts list
    #[command(alias = "s")]
    Scan(ScanCommand),
}

impl Cli {
    /// Settings from `--config` if given, otherwise from the default location.
    pub fn settings(&self) -> ConfigResult<AppSettings> {
        match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        }
    }

    /// Run the selected subcommand, writing its output to stdout.
    pub async fn execute(&self) -> CliResult<()> {
        let settings = self.settings()?;
        let hosts_file = self
            .hosts_file
            .clone()
            .unwrap_or_else(|| settings.hosts_file.clone());

        let mut out = io::stdout();
        match &self.command {
            Commands::Hosts(cmd) => cmd.execute(&mut out, &hosts_file),
            Commands::Scan(cmd) => {
                cmd.execute(&mut out, &hosts_file, &settings, self.verbose)
                    .await
            }
        }
    }
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_flags() {
        let cli = Cli::try_parse_from([
            "pscan", "--hosts-file", "targets", "scan", "-p", "22,80", "-o", "json",
        ])
        .unwrap();

        assert_eq!(cli.hosts_file, Some(PathBuf::from("targets")));
        match cli.command {
            Commands::Scan(cmd) => {
                assert_eq!(cmd.ports.as_deref(), Some("22,80"));
                assert_eq!(cmd.output, OutputFormat::Json);
            }
            other => panic!("expected scan, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_hosts_add() {
        let cli = Cli::try_parse_from(["pscan", "hosts", "add", "host1", "host2"]).unwrap();
        match cli.command {
            Commands::Hosts(HostsCommand {
                action: HostsAction::Add { hosts },
            }) => assert_eq!(hosts, ["host1", "host2"]),
            other => panic!("expected hosts add, got {other:?}"),
        }
    }

    #[test]
    fn test_hosts_add_requires_argument() {
        assert!(Cli::try_parse_from(["pscan", "hosts", "add"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("missing.json");
        let cli = Cli::try_parse_from([
            "pscan",
            "--config",
            config.to_str().unwrap(),
            "hosts",
            "list",
        ])
        .unwrap();

        assert!(cli.settings().is_err());
    }

    // Add three hosts, list them, delete one and list again, all against
    // the same hosts file.
    #[test]
    fn test_hosts_workflow() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("pscan.hosts");
        let hosts: Vec<String> = ["host1", "host2", "host3"].map(String::from).to_vec();

        let mut out = Vec::new();
        add_action(&mut out, &file, &hosts).unwrap();
        list_action(&mut out, &file).unwrap();
        delete_action(&mut out, &file, &["host2".to_string()]).unwrap();
        list_action(&mut out, &file).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Added host: host1\nAdded host: host2\nAdded host: host3\n\
             host1\nhost2\nhost3\n\
             Deleted host: host2\n\
             host1\nhost3\n"
        );
    }
}
