//! # pscan - TCP port scanning for a list of hosts
//!
//! pscan keeps a persisted list of hostnames and checks which TCP ports are
//! reachable on each of them.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use pscan::hosts::HostsList;
//! use pscan::scanner;
//! use pscan::types::Port;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut hosts = HostsList::new();
//!     hosts.load("pscan.hosts")?;
//!     hosts.add("localhost")?;
//!     hosts.save("pscan.hosts")?;
//!
//!     let ports = [Port::new(22).unwrap(), Port::new(80).unwrap()];
//!     for result in scanner::run(&hosts, &ports).await {
//!         println!("{}: {} open", result.host, result.open_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`hosts`] - The ordered, deduplicated hosts list and its file format
//! - [`scanner`] - Host resolution and sequential TCP connect probes
//! - [`types`] - Validated port numbers and port specifications
//! - [`config`] - Settings file and paths
//! - [`output`] - Plain text, JSON, and CSV renderers
//! - [`cli`] - Subcommands used by the `pscan` binary
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, RegistryError};
pub use hosts::HostsList;
pub use scanner::{PortResult, PortState, ScanResult, Scanner};
pub use types::{Port, PortSpec};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` overrides
/// the default level, which is `warn`, or `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "pscan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
